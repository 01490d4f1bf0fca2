use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::models::asset::Asset;

pub const ORGANIC_METAPROPERTY_ID: &str = "4F8E1C2A-9D35-4B6A-8F2A-BE82C4D17E90";
pub const PAID_METAPROPERTY_ID: &str = "7A91D4B3-52C8-4E0F-9DC1-63F2A8B45E07";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryType {
    Organic,
    Paid,
}

impl ExpiryType {
    pub const ALL: [ExpiryType; 2] = [ExpiryType::Organic, ExpiryType::Paid];

    pub fn flat_key(&self) -> &'static str {
        match self {
            ExpiryType::Organic => "Organic_expiry_date",
            ExpiryType::Paid => "Paid_expiry_date",
        }
    }

    pub fn property_key(&self) -> &'static str {
        match self {
            ExpiryType::Organic => "property_Organic_expiry_date",
            ExpiryType::Paid => "property_Paid_expiry_date",
        }
    }

    pub fn metaproperty_id(&self) -> &'static str {
        match self {
            ExpiryType::Organic => ORGANIC_METAPROPERTY_ID,
            ExpiryType::Paid => PAID_METAPROPERTY_ID,
        }
    }
}

impl Display for ExpiryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ExpiryType::Organic => write!(f, "organic"),
            ExpiryType::Paid => write!(f, "paid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataShape {
    FlatKey,
    MetadataId,
    TopLevelProperty,
}

impl Default for MetadataShape {
    fn default() -> Self {
        MetadataShape::TopLevelProperty
    }
}

impl MetadataShape {
    // Only detail records expose the top-level property fields.
    pub fn requires_detail_fetch(&self) -> bool {
        matches!(self, MetadataShape::TopLevelProperty)
    }

    pub fn extract(&self, asset: &Asset, expiry_type: ExpiryType) -> Option<String> {
        match self {
            MetadataShape::FlatKey => asset
                .metadata
                .get(expiry_type.flat_key())
                .and_then(|value| value.as_str())
                .map(str::to_owned),
            MetadataShape::MetadataId => asset.metadata.values().find_map(|entry| {
                let id = entry.get("id")?.as_str()?;
                if id == expiry_type.metaproperty_id() {
                    entry.get("value")?.as_str().map(str::to_owned)
                } else {
                    None
                }
            }),
            MetadataShape::TopLevelProperty => asset
                .properties
                .get(expiry_type.property_key())
                .and_then(|value| value.as_str())
                .map(str::to_owned),
        }
    }
}
