//! Bridge message types
//!
//! JSON messages posted by the embedded web page and the responses the
//! bridge sends back over the same channel.

use serde::{Deserialize, Serialize};

use crate::models::{DiscoveredPrinter, OrderLine};

/// Action requested by the web page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeAction {
    /// Print a receipt for the order in `data`
    PrintOrder,
    /// Print a test page
    Test,
    /// Kick the cash drawer
    OpenDrawer,
    /// Scan for printers
    Discovery,
}

impl std::fmt::Display for BridgeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeAction::PrintOrder => write!(f, "print_order"),
            BridgeAction::Test => write!(f, "test"),
            BridgeAction::OpenDrawer => write!(f, "open_drawer"),
            BridgeAction::Discovery => write!(f, "discovery"),
        }
    }
}

/// Incoming message from the web page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub action: BridgeAction,
    #[serde(default)]
    pub data: Vec<OrderLine>,
    /// Printer address (IP for LAN printers)
    #[serde(default)]
    pub ip: Option<String>,
}

impl BridgeRequest {
    pub fn new(action: BridgeAction) -> Self {
        Self {
            action,
            data: Vec::new(),
            ip: None,
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_data(mut self, data: Vec<OrderLine>) -> Self {
        self.data = data;
        self
    }

    /// Target address if present and non-blank
    pub fn target(&self) -> Option<&str> {
        self.ip.as_deref().map(str::trim).filter(|ip| !ip.is_empty())
    }
}

/// Response posted back to the web page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeResponse {
    /// The document was sent to the printer
    Printed { action: BridgeAction },
    /// The request was well-formed but nothing was done
    Ignored { action: BridgeAction, reason: String },
    /// Discovery finished
    Printers { printers: Vec<DiscoveredPrinter> },
    /// Decoding, permission or transport failure
    Error { message: String },
}

impl BridgeResponse {
    pub fn ignored(action: BridgeAction, reason: impl Into<String>) -> Self {
        Self::Ignored {
            action,
            reason: reason.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
