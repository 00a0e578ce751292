//! Message dispatch
//!
//! One [`BridgeHandler`] serves every message from the web page. It owns
//! the printer connector, the permission gate and the discovery source,
//! so the platform pieces can be swapped without touching dispatch.

use chrono::Local;
use receipt_printer::{NetworkConnector, Printer, PrinterConnector};
use shared::message::{BridgeAction, BridgeRequest, BridgeResponse};
use shared::models::{InterfaceType, OrderLine};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::discovery::{DeviceDiscovery, SubnetScanner, collect_printers};
use super::permission::{AlwaysGranted, PermissionGate, confirm_permission};
use crate::core::{BridgeError, BridgeResult, Config};
use crate::receipt::{ReceiptDocument, ReceiptHeader, aggregate_order, render_escpos};

/// Dispatch settings taken from [`Config`]
#[derive(Debug, Clone, Default)]
pub struct HandlerSettings {
    pub interface: InterfaceType,
    /// Printer used by `open_drawer` when the message has no `ip`
    pub default_identifier: Option<String>,
    pub header: ReceiptHeader,
}

impl HandlerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interface: config.interface,
            default_identifier: config.printer_identifier.clone(),
            header: config.receipt_header(),
        }
    }
}

pub struct BridgeHandler<C, G, D> {
    connector: C,
    permission: G,
    discovery: D,
    settings: HandlerSettings,
}

impl BridgeHandler<NetworkConnector, AlwaysGranted, SubnetScanner> {
    /// LAN handler built from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            NetworkConnector::new(config.printer_port, config.print_timeout()),
            AlwaysGranted,
            SubnetScanner::from_config(config),
            HandlerSettings::from_config(config),
        )
    }
}

impl<C, G, D> BridgeHandler<C, G, D>
where
    C: PrinterConnector,
    G: PermissionGate,
    D: DeviceDiscovery,
{
    pub fn new(connector: C, permission: G, discovery: D, settings: HandlerSettings) -> Self {
        Self {
            connector,
            permission,
            discovery,
            settings,
        }
    }

    /// Decode and handle one raw message
    ///
    /// Never fails: every error becomes an `error` response.
    pub async fn handle_message(&self, message: &str) -> BridgeResponse {
        let result = match serde_json::from_str::<BridgeRequest>(message) {
            Ok(request) => self.handle(request).await,
            Err(e) => Err(e.into()),
        };

        result.unwrap_or_else(|e| {
            error!(error = %e, "Message failed");
            BridgeResponse::error(e.to_string())
        })
    }

    #[instrument(skip_all, fields(request_id = %Uuid::new_v4(), action = %request.action))]
    pub async fn handle(&self, request: BridgeRequest) -> BridgeResult<BridgeResponse> {
        let action = request.action;
        match action {
            BridgeAction::PrintOrder => {
                let Some(ip) = request.target() else {
                    return Ok(ignored(action, "missing printer address"));
                };
                if request.data.is_empty() {
                    return Ok(ignored(action, "empty order"));
                }
                self.print_order(ip, &request.data).await?;
            }
            BridgeAction::Test => {
                let Some(ip) = request.target() else {
                    return Ok(ignored(action, "missing printer address"));
                };
                self.send(ip, &ReceiptDocument::test_page()).await?;
            }
            BridgeAction::OpenDrawer => {
                let target = request
                    .target()
                    .or(self.settings.default_identifier.as_deref());
                let Some(ip) = target else {
                    return Ok(ignored(action, "no printer configured"));
                };
                self.send(ip, &ReceiptDocument::drawer_kick()).await?;
            }
            BridgeAction::Discovery => {
                let printers = collect_printers(&self.discovery).await?;
                return Ok(BridgeResponse::Printers { printers });
            }
        }

        Ok(BridgeResponse::Printed { action })
    }

    async fn print_order(&self, ip: &str, lines: &[OrderLine]) -> BridgeResult<()> {
        if lines.iter().any(OrderLine::has_negative_amounts) {
            warn!("Order contains negative amounts, printing as given");
        }

        let order = aggregate_order(lines);
        if order.totals.is_saturated() {
            warn!("Order totals exceed the decimal range, printing clamped values");
        }
        info!(
            items = order.items.len(),
            gross = %order.totals.gross_total(),
            "Printing order receipt"
        );

        let doc = ReceiptDocument::order_receipt(&order, &self.settings.header, &Local::now());
        self.send(ip, &doc).await
    }

    async fn send(&self, identifier: &str, doc: &ReceiptDocument) -> BridgeResult<()> {
        if self.settings.interface.requires_permission()
            && !confirm_permission(&self.permission).await
        {
            return Err(BridgeError::PermissionDenied(
                "nearby devices permission refused".into(),
            ));
        }

        let printer = self.connector.connect(identifier)?;
        let data = render_escpos(doc);
        printer.print(&data).await?;

        info!(printer = identifier, bytes = data.len(), "Document sent");
        Ok(())
    }
}

fn ignored(action: BridgeAction, reason: &str) -> BridgeResponse {
    warn!(%action, reason, "Message ignored");
    BridgeResponse::ignored(action, reason)
}
