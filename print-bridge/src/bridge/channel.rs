//! Newline-delimited JSON message loop

use receipt_printer::PrinterConnector;
use shared::message::BridgeResponse;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::discovery::DeviceDiscovery;
use super::handler::BridgeHandler;
use super::permission::PermissionGate;
use crate::core::{BridgeError, BridgeResult};

/// Serve messages until `reader` reaches end of input
///
/// Messages are handled one at a time; each gets exactly one response
/// line. Blank lines are skipped. A line that is not valid UTF-8 gets an
/// `error` response; only I/O failures end the loop.
pub async fn run_channel<C, G, D, R, W>(
    handler: &BridgeHandler<C, G, D>,
    mut reader: R,
    mut writer: W,
) -> BridgeResult<()>
where
    C: PrinterConnector,
    G: PermissionGate,
    D: DeviceDiscovery,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(len = line.len(), "Message received");
                handler.handle_message(line).await
            }
            Err(e) => {
                let err = BridgeError::from(e);
                warn!(error = %err, len = buf.len(), "Message rejected");
                BridgeResponse::error(err.to_string())
            }
        };

        write_response(&mut writer, &response).await?;
        handled += 1;
    }

    info!(handled, "Message channel closed");
    Ok(())
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &BridgeResponse,
) -> BridgeResult<()> {
    let mut out = serde_json::to_vec(response)?;
    out.push(b'\n');
    writer.write_all(&out).await?;
    writer.flush().await?;
    Ok(())
}
