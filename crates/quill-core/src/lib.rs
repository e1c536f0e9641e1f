//! # Quill Core
//!
//! Core types, domain records, and error definitions for Quill.
//! Every other crate in the workspace builds on the types defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
