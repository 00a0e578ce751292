//! Bridge between the web page's message channel and the printer
//!
//! - `handler`: dispatches `print_order` / `test` / `open_drawer` / `discovery`
//! - `permission`: runtime permission gate for Bluetooth printers
//! - `discovery`: printer discovery with event-based notification
//! - `channel`: newline-delimited JSON message loop

pub mod channel;
pub mod discovery;
pub mod handler;
pub mod permission;

pub use channel::run_channel;
pub use discovery::{DeviceDiscovery, DiscoveryEvent, SubnetScanner, collect_printers};
pub use handler::{BridgeHandler, HandlerSettings};
pub use permission::{AlwaysGranted, PermissionGate, confirm_permission};
