//! Printer adapters for sending ESC/POS data
//!
//! Supports network printers (raw TCP, port 9100).

use crate::error::{PrintError, PrintResult};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info, instrument};

/// Default raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Resolves a printer identifier (as sent by the web page) to a printer
pub trait PrinterConnector {
    type Printer: Printer;

    fn connect(&self, identifier: &str) -> PrintResult<Self::Printer>;
}

/// Network printer (TCP port 9100)
///
/// Most thermal printers support raw TCP printing on port 9100.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Printer at `host:port`
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        Self::from_addr(&format!("{}:{}", host, port))
    }

    /// Create from a socket address string (e.g., "192.168.1.100:9100")
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        addr.parse()
            .map(Self::at)
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", addr)))
    }

    /// Printer at a resolved socket address, with the default timeout
    pub fn at(addr: SocketAddr) -> Self {
        Self {
            addr,
            timeout: Duration::from_secs(5),
        }
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(self, data), fields(addr = %self.addr, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        info!("Connected, sending {} bytes", data.len());

        stream.write_all(data).await.map_err(|e| {
            PrintError::Io(std::io::Error::new(
                e.kind(),
                format!("Write failed: {}", e),
            ))
        })?;

        stream.flush().await?;
        stream.shutdown().await?;

        info!("Print job sent successfully");
        Ok(())
    }

    /// Whether the printer accepts a connection within the timeout
    ///
    /// Used as the per-host probe during discovery, so it logs at debug.
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(addr = %self.addr, error = %e, "Printer unreachable");
                false
            }
            Err(_) => false,
        }
    }
}

/// Connector for LAN printers
///
/// Accepts either a bare IP (`192.168.1.36`, default port used) or a full
/// socket address (`192.168.1.36:9101`).
#[derive(Debug, Clone)]
pub struct NetworkConnector {
    port: u16,
    timeout: Duration,
}

impl NetworkConnector {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

impl Default for NetworkConnector {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, Duration::from_secs(5))
    }
}

impl PrinterConnector for NetworkConnector {
    type Printer = NetworkPrinter;

    fn connect(&self, identifier: &str) -> PrintResult<NetworkPrinter> {
        let identifier = identifier.trim();
        let printer = match NetworkPrinter::from_addr(identifier) {
            Ok(p) => p,
            Err(_) => NetworkPrinter::new(identifier, self.port)?,
        };
        Ok(printer.with_timeout(self.timeout))
    }
}
