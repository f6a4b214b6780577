//! dirtree: an in-memory directory namespace driven by line-oriented commands
//!
//! Layers, from the inside out:
//! - [`domain`]: the namespace tree, its nodes and path rules (no I/O)
//! - [`application`]: command parsing, dispatch, session and reconstruction script
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing, output and exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
