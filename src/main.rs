use anyhow::{Error, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use expiry_alert_service::{
    clients::{catalog::CatalogClient, webhook::WebhookClient},
    config::Config,
    utils::run_scan,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    let run_id = Uuid::new_v4();
    info!(
        run_id = %run_id,
        alert_window_days = config.alert_window_days,
        "Starting expiry scan"
    );

    let catalog_client = CatalogClient::new(&config)?;
    let webhook_client = WebhookClient::new(&config)?;

    let summary = run_scan(&config, &catalog_client, &webhook_client).await;

    info!(
        run_id = %run_id,
        assets_scanned = summary.assets_scanned,
        notifications_sent = summary.notifications_sent,
        delivery_failures = summary.delivery_failures,
        "Expiry scan finished"
    );

    Ok(())
}
