//! # receipt-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Fixed-width text padding and truncation
//! - ESC/POS command building
//! - Windows-1252 encoding for Latin receipt printers
//! - Network printing (TCP port 9100)
//! - Logo rasterization (optional)
//!
//! Business logic (WHAT to print) stays in `print-bridge`.
//!
//! ## Example
//!
//! ```ignore
//! use receipt_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! let mut builder = EscPosBuilder::new();
//! builder.center();
//! builder.text("Hello World\n");
//! builder.cut_partial();
//!
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;
mod text;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escpos::{EscPosBuilder, Font};
pub use printer::{DEFAULT_PORT, NetworkConnector, NetworkPrinter, Printer, PrinterConnector};
pub use text::{char_width, pad, truncate};

#[cfg(feature = "image")]
pub use escpos::process_logo;
