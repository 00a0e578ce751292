//! Printer Model

use serde::{Deserialize, Serialize};

/// Physical interface used to reach the printer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    #[default]
    Lan,
    Bluetooth,
}

impl InterfaceType {
    /// Parse from a config value, falling back to LAN
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "bluetooth" | "bt" => Self::Bluetooth,
            _ => Self::Lan,
        }
    }

    /// Whether connecting over this interface needs a runtime permission
    pub fn requires_permission(self) -> bool {
        matches!(self, Self::Bluetooth)
    }
}

/// Printer found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredPrinter {
    pub name: String,
    pub ip_address: String,
}
