use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{config::Config, models::asset::Asset};

pub struct CatalogClient {
    http_client: Client,
    base_url: String,
    token: String,
    page_size: u32,
    fetch_details: bool,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.catalog_base_url, "Catalog client initialized");

        Ok(Self {
            http_client,
            base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
            token: config.catalog_token.clone(),
            page_size: config.page_size,
            fetch_details: config.metadata_shape.requires_detail_fetch(),
        })
    }

    pub async fn fetch_assets(&self) -> Vec<Asset> {
        let mut assets = Vec::new();
        let mut page = 1u32;

        loop {
            let batch = match self.fetch_page(page).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(page, error = %e, "Page fetch failed, continuing with partial catalog");
                    break;
                }
            };

            let batch_len = batch.len();
            debug!(page, batch_len, "Fetched catalog page");

            if self.fetch_details {
                for summary in batch {
                    match self.fetch_detail(&summary.id).await {
                        Ok(detail) => assets.push(detail),
                        Err(e) => {
                            warn!(asset_id = %summary.id, error = %e, "Detail fetch failed, skipping asset");
                        }
                    }
                }
            } else {
                assets.extend(batch);
            }

            // A short page is the last page.
            if batch_len < self.page_size as usize {
                break;
            }
            page += 1;
        }

        assets
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<Asset>, Error> {
        let url = format!(
            "{}/api/v4/media/?page={}&limit={}",
            self.base_url, page, self.page_size
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await?;
            Err(anyhow!("Catalog returned status {}: {}", status, body))
        }
    }

    async fn fetch_detail(&self, asset_id: &str) -> Result<Asset, Error> {
        let url = format!("{}/api/v4/media/{}/", self.base_url, asset_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await?;
            Err(anyhow!(
                "Catalog returned status {} for asset {}: {}",
                status,
                asset_id,
                body
            ))
        }
    }
}
