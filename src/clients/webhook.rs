use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{asset::Asset, expiry::ExpiryType, webhook::WebhookMessage},
};

pub struct WebhookClient {
    http_client: Client,
    webhook_url: String,
    asset_base_url: String,
}

impl WebhookClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!("Webhook client initialized");

        Ok(Self {
            http_client,
            webhook_url: config.webhook_url.clone(),
            asset_base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn send_expiry_alert(
        &self,
        asset: &Asset,
        expiry_type: ExpiryType,
        expiry_date: &str,
    ) -> Result<(), Error> {
        let asset_url = format!("{}/media/{}", self.asset_base_url, asset.id);
        let message =
            WebhookMessage::expiry_alert(asset.display_name(), expiry_type, expiry_date, &asset_url);

        debug!(
            asset_id = %asset.id,
            expiry_type = %expiry_type,
            "Posting expiry notification"
        );

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(anyhow!("Webhook returned status {}: {}", status, body))
        }
    }
}
