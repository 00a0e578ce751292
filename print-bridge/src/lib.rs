//! Print Bridge
//!
//! Receives order messages from the POS web page and prints customer
//! receipts on ESC/POS thermal printers.
//!
//! # Modules
//!
//! - `core`: configuration and errors
//! - `receipt`: aggregation, layout and ESC/POS rendering
//! - `bridge`: message dispatch, permission gate, discovery, channel loop
//! - `utils`: logging

pub mod bridge;
pub mod core;
pub mod receipt;
pub mod utils;

pub use bridge::{BridgeHandler, HandlerSettings, run_channel};
pub use core::{BridgeError, BridgeResult, Config};
pub use utils::logger::init_logger_with_file;
