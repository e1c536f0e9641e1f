//! # Quill Cache CLI
//!
//! Command definitions and execution for `quill-cachectl`, kept in a
//! library so commands can be tested against an in-memory store.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::execute;
