use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::{
    clients::{catalog::CatalogClient, webhook::WebhookClient},
    config::Config,
    models::{expiry::ExpiryType, scan::ScanSummary},
};

pub async fn run_scan(
    config: &Config,
    catalog_client: &CatalogClient,
    webhook_client: &WebhookClient,
) -> ScanSummary {
    let assets = catalog_client.fetch_assets().await;

    info!(asset_count = assets.len(), "Catalog fetch complete");

    let mut notifications_sent = 0u32;
    let mut delivery_failures = 0u32;

    for asset in &assets {
        for expiry_type in ExpiryType::ALL {
            let raw = config.metadata_shape.extract(asset, expiry_type);
            let label = format!("{} ({} expiry)", asset.display_name(), expiry_type);

            if !is_within_window(raw.as_deref(), &label, config.alert_window_days) {
                continue;
            }
            let Some(expiry_date) = raw else { continue };

            notifications_sent += 1;

            match webhook_client
                .send_expiry_alert(asset, expiry_type, &expiry_date)
                .await
            {
                Ok(()) => {
                    info!(
                        asset_id = %asset.id,
                        expiry_type = %expiry_type,
                        expiry_date = %expiry_date,
                        "Expiry notification sent"
                    );
                }
                Err(e) => {
                    delivery_failures += 1;
                    warn!(
                        asset_id = %asset.id,
                        expiry_type = %expiry_type,
                        error = %e,
                        "Expiry notification failed"
                    );
                }
            }
        }
    }

    if notifications_sent == 0 {
        info!(assets_scanned = assets.len(), "Scan complete, no expiring assets found");
    } else {
        info!(
            assets_scanned = assets.len(),
            notifications_sent,
            delivery_failures,
            "Scan complete"
        );
    }

    ScanSummary {
        assets_scanned: assets.len(),
        notifications_sent,
        delivery_failures,
    }
}

pub fn is_within_window(raw: Option<&str>, label: &str, window_days: i64) -> bool {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        debug!(label, "Expiry date missing or empty");
        return false;
    };

    let Some(expiry) = parse_expiry(raw) else {
        warn!(label, raw, "Expiry date could not be parsed");
        return false;
    };

    within_window(Utc::now(), expiry, window_days)
}

pub fn within_window(now: DateTime<Utc>, expiry: DateTime<Utc>, window_days: i64) -> bool {
    let cutoff = now + Duration::days(window_days);
    expiry > now && expiry <= cutoff
}

pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&parsed));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| Utc.from_utc_datetime(&datetime))
}
