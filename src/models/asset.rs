use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub id: String,

    #[serde(default, rename = "mediaName")]
    pub media_name: Option<String>,

    #[serde(default, rename = "originalFilename")]
    pub original_filename: Option<String>,

    #[serde(default)]
    pub metadata: HashMap<String, JsonValue>,

    // Detail records carry expiry dates as top-level "property_*" fields,
    // so everything not named above is kept.
    #[serde(flatten)]
    pub properties: HashMap<String, JsonValue>,
}

impl Asset {
    pub fn display_name(&self) -> &str {
        self.media_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self
                .original_filename
                .as_deref()
                .filter(|name| !name.is_empty()))
            .unwrap_or(&self.id)
    }
}
