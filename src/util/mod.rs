//! Small helpers shared across the crate.

pub mod format;

pub use format::format_bytes;
