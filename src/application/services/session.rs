//! Session service
//!
//! Replays an optional command file, then reads commands until standard
//! input closes, and finally persists the reconstruction script.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::script;
use crate::application::services::CommandDispatcher;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::NamespaceTree;
use crate::infrastructure::traits::FileSystem;

pub struct SessionService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl SessionService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Run a full session and return the final tree.
    ///
    /// A missing `input_file` aborts before `stdin` is read and before any
    /// state is written.
    #[instrument(level = "debug", skip(self, stdin, out, err))]
    pub fn run<R, W, E>(
        &self,
        input_file: Option<&Path>,
        stdin: R,
        out: &mut W,
        err: &mut E,
    ) -> ApplicationResult<NamespaceTree>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut dispatcher = CommandDispatcher::new();

        if let Some(path) = input_file {
            if !self.fs.exists(path) {
                return Err(ApplicationError::InputNotFound(path.to_path_buf()));
            }
            debug!("Replaying commands from {}", path.display());
            let reader = self.fs.open(path).with_path_context("open input", path)?;
            dispatcher.process_input(reader, out, err)?;
        }

        dispatcher.process_input(stdin, out, err)?;

        let state_file = &self.settings.state_file;
        match self.save_state(dispatcher.tree()) {
            Ok(()) => writeln!(out, "State saved to {} file", state_file.display())
                .with_stream_context("write confirmation")?,
            Err(e) => {
                let reason = std::error::Error::source(&e)
                    .map(|source| format!(": {source}"))
                    .unwrap_or_default();
                writeln!(err, "Error saving state: {e}{reason}").with_stream_context("write error")?
            }
        }

        Ok(dispatcher.into_tree())
    }

    /// Write the reconstruction script for `tree` to the configured state file.
    pub fn save_state(&self, tree: &NamespaceTree) -> ApplicationResult<()> {
        let state_file = &self.settings.state_file;
        let content = script::render(tree);
        self.fs
            .write(state_file, &content)
            .with_path_context("write state", state_file)?;
        info!(
            "Wrote {} reconstruction lines to {}",
            content.lines().count(),
            state_file.display()
        );
        Ok(())
    }
}
