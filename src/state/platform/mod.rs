//! Platform-specific helpers.
//!
//! - [`clipboard`] - copying text to the system clipboard
//! - [`paths`] - configuration and data directory paths

pub mod clipboard;
pub mod paths;
