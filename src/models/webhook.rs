use serde::Serialize;

use crate::models::expiry::ExpiryType;

#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    pub text: String,
}

impl WebhookMessage {
    pub fn expiry_alert(
        asset_name: &str,
        expiry_type: ExpiryType,
        expiry_date: &str,
        asset_url: &str,
    ) -> Self {
        Self {
            text: format!(
                ":warning: *{}* has a *{} expiry* on *{}*.\n<{}|View asset>",
                asset_name, expiry_type, expiry_date, asset_url
            ),
        }
    }
}
