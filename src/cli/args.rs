//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// In-memory directory namespace driven by CREATE, MOVE, DELETE and LIST commands.
///
/// Commands are read from INPUT (if given) and then from standard input.
/// When standard input closes, a reconstruction script is written.
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command file replayed before standard input
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Reconstruction script path (overrides config and STATE_RECONSTRUCTION_FILE)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub state_file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}
