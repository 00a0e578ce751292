//! Runtime permission gate
//!
//! Bluetooth printers need the "nearby devices" permission on mobile
//! platforms. The embedding app implements [`PermissionGate`] on top of
//! its platform API.

use tracing::{info, warn};

#[allow(async_fn_in_trait)]
pub trait PermissionGate {
    /// Whether the permission is already granted
    async fn check(&self) -> bool;

    /// Prompt the user; true if granted
    async fn request(&self) -> bool;
}

/// Check the permission and prompt only when it is missing
pub async fn confirm_permission<G: PermissionGate>(gate: &G) -> bool {
    if gate.check().await {
        return true;
    }

    info!("Requesting printer permission");
    let granted = gate.request().await;
    if !granted {
        warn!("Printer permission refused");
    }
    granted
}

/// Gate for platforms without runtime permissions
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

impl PermissionGate for AlwaysGranted {
    async fn check(&self) -> bool {
        true
    }

    async fn request(&self) -> bool {
        true
    }
}
