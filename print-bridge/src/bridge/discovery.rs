//! Printer discovery
//!
//! Discovery reports through a channel: one `DeviceFound` per printer,
//! then `Finished`. [`collect_printers`] drains the channel into a list.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use futures::StreamExt;
use receipt_printer::{NetworkPrinter, Printer};
use shared::models::DiscoveredPrinter;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::core::{BridgeError, BridgeResult, Config};

/// Concurrent probes while scanning a subnet
const SCAN_CONCURRENCY: usize = 64;

/// Per-host connect timeout
const PROBE_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    DeviceFound(DiscoveredPrinter),
    Finished,
}

/// Source of printers
#[allow(async_fn_in_trait)]
pub trait DeviceDiscovery {
    /// Run one scan, sending events on `tx`
    ///
    /// Implementations send `Finished` when the scan completes normally.
    async fn discover(&self, tx: mpsc::Sender<DiscoveryEvent>) -> BridgeResult<()>;
}

/// Run a scan and collect the printers it reports
///
/// Duplicate addresses are reported once, in the order first seen.
pub async fn collect_printers<D: DeviceDiscovery>(
    discovery: &D,
) -> BridgeResult<Vec<DiscoveredPrinter>> {
    let (tx, mut rx) = mpsc::channel(32);

    let collect = async {
        let mut printers: Vec<DiscoveredPrinter> = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                DiscoveryEvent::DeviceFound(printer) => {
                    if printers.iter().any(|p| p.ip_address == printer.ip_address) {
                        continue;
                    }
                    debug!(ip = %printer.ip_address, name = %printer.name, "Printer found");
                    printers.push(printer);
                }
                DiscoveryEvent::Finished => break,
            }
        }
        printers
    };

    let (result, printers) = tokio::join!(discovery.discover(tx), collect);
    result?;

    info!(count = printers.len(), "Discovery finished");
    Ok(printers)
}

/// Scans a /24 subnet for hosts accepting connections on the print port
#[derive(Debug, Clone)]
pub struct SubnetScanner {
    prefix: Option<String>,
    port: u16,
    budget: Duration,
}

impl SubnetScanner {
    /// `prefix` is the first three octets, e.g. `192.168.1`
    pub fn new(prefix: Option<String>, port: u16, budget: Duration) -> Self {
        Self {
            prefix,
            port,
            budget,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.discovery_subnet.clone(),
            config.printer_port,
            config.discovery_timeout(),
        )
    }
}

fn parse_prefix(prefix: &str) -> Option<[u8; 3]> {
    let octets: Vec<u8> = prefix
        .trim()
        .trim_end_matches('.')
        .split('.')
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;
    octets.try_into().ok()
}

impl DeviceDiscovery for SubnetScanner {
    async fn discover(&self, tx: mpsc::Sender<DiscoveryEvent>) -> BridgeResult<()> {
        let prefix = self
            .prefix
            .as_deref()
            .ok_or_else(|| BridgeError::Discovery("no subnet configured".into()))?;
        let [a, b, c] = parse_prefix(prefix)
            .ok_or_else(|| BridgeError::Discovery(format!("invalid subnet: {}", prefix)))?;

        info!(subnet = %prefix, port = self.port, "Scanning for printers");

        let port = self.port;
        let scan = futures::stream::iter(1..=254u8)
            .map(|host| async move {
                let addr = SocketAddr::from((Ipv4Addr::new(a, b, c, host), port));
                let printer = NetworkPrinter::at(addr).with_timeout(PROBE_TIMEOUT);
                printer.is_online().await.then_some(addr)
            })
            .buffer_unordered(SCAN_CONCURRENCY)
            .for_each(|found| {
                let tx = tx.clone();
                async move {
                    if let Some(addr) = found {
                        let ip = addr.ip().to_string();
                        let printer = DiscoveredPrinter {
                            name: format!("Printer {}", ip),
                            ip_address: ip,
                        };
                        let _ = tx.send(DiscoveryEvent::DeviceFound(printer)).await;
                    }
                }
            });

        if tokio::time::timeout(self.budget, scan).await.is_err() {
            warn!(budget_ms = self.budget.as_millis() as u64, "Discovery timed out");
        }

        let _ = tx.send(DiscoveryEvent::Finished).await;
        Ok(())
    }
}
