//! Application layer: command handling and session orchestration
//!
//! This layer drives the domain tree and depends on I/O boundary traits.

pub mod command;
pub mod error;
pub mod error_ext;
pub mod script;
pub mod services;

pub use command::{Command, CommandError, Verb};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
