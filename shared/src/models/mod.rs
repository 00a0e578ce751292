//! Data models
//!
//! Shared between the print bridge and the web page (via the message channel).
//! Field names follow the web page's camelCase JSON.

pub mod order;
pub mod printer;

// Re-exports
pub use order::*;
pub use printer::*;
