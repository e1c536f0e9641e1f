//! Domain records cached by the application.
//!
//! The cache layer treats these as opaque JSON payloads; they carry just
//! enough behavior to be useful to callers building them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
