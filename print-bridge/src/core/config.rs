use std::path::PathBuf;
use std::time::Duration;

use receipt_printer::DEFAULT_PORT;
use shared::models::InterfaceType;

use crate::receipt::ReceiptHeader;

/// Bridge configuration
///
/// # Environment variables
///
/// Every field can be set from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PRINTER_IDENTIFIER | (empty) | printer used when a message has no `ip` |
/// | PRINTER_PORT | 9100 | raw TCP print port |
/// | PRINTER_INTERFACE | lan | `lan` or `bluetooth` |
/// | PRINT_TIMEOUT_MS | 5000 | printer connect timeout |
/// | DISCOVERY_SUBNET | (empty) | /24 prefix to scan, e.g. `192.168.1` |
/// | DISCOVERY_TIMEOUT_MS | 10000 | whole-scan budget |
/// | RECEIPT_HEADER | (empty) | header lines separated by `\|` |
/// | RECEIPT_LOGO | (empty) | logo image path |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | (empty) | rolling log directory |
#[derive(Debug, Clone)]
pub struct Config {
    pub printer_identifier: Option<String>,
    pub printer_port: u16,
    pub interface: InterfaceType,
    pub print_timeout_ms: u64,
    pub discovery_subnet: Option<String>,
    pub discovery_timeout_ms: u64,
    pub receipt_header: Vec<String>,
    pub receipt_logo: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

/// Read a variable, treating blank values as unset
fn non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a `|`-separated header value into lines
fn parse_header(value: &str) -> Vec<String> {
    value.split('|').map(|line| line.trim().to_string()).collect()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            printer_identifier: non_empty("PRINTER_IDENTIFIER"),
            printer_port: non_empty("PRINTER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            interface: non_empty("PRINTER_INTERFACE")
                .map(|v| InterfaceType::from_value(&v))
                .unwrap_or_default(),
            print_timeout_ms: non_empty("PRINT_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            discovery_subnet: non_empty("DISCOVERY_SUBNET"),
            discovery_timeout_ms: non_empty("DISCOVERY_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            receipt_header: non_empty("RECEIPT_HEADER")
                .map(|v| parse_header(&v))
                .unwrap_or_default(),
            receipt_logo: non_empty("RECEIPT_LOGO").map(PathBuf::from),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    pub fn print_timeout(&self) -> Duration {
        Duration::from_millis(self.print_timeout_ms)
    }

    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }

    /// Store header printed on order receipts
    pub fn receipt_header(&self) -> ReceiptHeader {
        ReceiptHeader {
            logo: self.receipt_logo.clone(),
            lines: self.receipt_header.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            printer_identifier: None,
            printer_port: DEFAULT_PORT,
            interface: InterfaceType::Lan,
            print_timeout_ms: 5000,
            discovery_subnet: None,
            discovery_timeout_ms: 10000,
            receipt_header: Vec::new(),
            receipt_logo: None,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
