//! Shared types for the receipt bridge
//!
//! Order payloads and bridge protocol messages exchanged between the
//! embedded web page and the print bridge.

pub mod message;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use message::{BridgeAction, BridgeRequest, BridgeResponse};
pub use models::{DiscoveredPrinter, InterfaceType, OrderLine, OrderLineExtra};
