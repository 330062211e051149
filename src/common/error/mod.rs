//! Unified error types for the tabgrid library.
//!
//! The reconstruction pipeline reports failures through its own scoped
//! [`TableError`](crate::table::TableError); this module presents those (and
//! input-parsing failures) behind one consistent crate-level type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
