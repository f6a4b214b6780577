//! Command execution: wires settings and services, then runs the session

use std::io;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::ServiceContainer;

/// Execute the CLI invocation.
#[instrument(level = "debug", skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let container = ServiceContainer::new(effective_settings(cli)?);

    if cli.show_config {
        output::info(&container.settings.to_toml()?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    container.session.run(
        cli.input.as_deref(),
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}

/// Loaded settings with command line overrides applied.
fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load()?.with_state_file(cli.state_file.clone());
    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}
