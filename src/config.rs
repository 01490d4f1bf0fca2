use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::expiry::MetadataShape;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub catalog_base_url: String,
    pub catalog_token: String,
    pub webhook_url: String,

    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: i64,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default)]
    pub metadata_shape: MetadataShape,
}

fn default_alert_window_days() -> i64 {
    7
}

fn default_page_size() -> u32 {
    100
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
