//! Command dispatcher
//!
//! Executes parsed commands against a [`NamespaceTree`]. Command and
//! domain errors are reported on the error stream and never stop
//! processing; only stream I/O failures are returned.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, Command, IoResultExt};
use crate::domain::NamespaceTree;

/// Owns the tree for the duration of a session and feeds it commands.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    tree: NamespaceTree,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume dispatching against an existing tree.
    pub fn with_tree(tree: NamespaceTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    pub fn into_tree(self) -> NamespaceTree {
        self.tree
    }

    /// Run one command. `LIST` output goes to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> ApplicationResult<()> {
        match command {
            Command::Create { path } => {
                self.tree.create(&path)?;
            }
            Command::Move { source, target } => self.tree.move_node(&source, &target)?,
            Command::Delete { path } => {
                self.tree.delete(&path)?;
            }
            Command::List => {
                writeln!(out, "{}", self.tree).with_stream_context("write listing")?;
            }
            Command::Noop => {}
        }
        Ok(())
    }

    /// Parse and run one line, reporting command and domain errors to `err`.
    #[instrument(level = "debug", skip(self, out, err))]
    pub fn process_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> ApplicationResult<()> {
        let result = Command::parse(line)
            .map_err(ApplicationError::from)
            .and_then(|command| self.execute(command, out));

        match result {
            Ok(()) => Ok(()),
            Err(e @ (ApplicationError::Command(_) | ApplicationError::Domain(_))) => {
                debug!("Command rejected: {}", e);
                writeln!(err, "{e}").with_stream_context("write error")
            }
            Err(e) => Err(e),
        }
    }

    /// Run every line of `input` until it is exhausted.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and still run.
    pub fn process_input<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> ApplicationResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_stream_context("read command")?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("Replaced invalid UTF-8 in input line: {}", line.trim());
            }
            self.process_line(line.trim(), out, err)?;
        }
        out.flush().with_stream_context("flush output")?;
        Ok(())
    }
}
