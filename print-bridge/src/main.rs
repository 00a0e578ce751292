use print_bridge::{BridgeHandler, Config, init_logger_with_file, run_channel};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so it feeds the config
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        interface = ?config.interface,
        port = config.printer_port,
        "Print bridge starting"
    );

    let handler = BridgeHandler::from_config(&config);
    run_channel(
        &handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}
