use std::collections::HashMap;

use expiry_alert_service::models::{
    asset::Asset,
    expiry::{ExpiryType, MetadataShape, ORGANIC_METAPROPERTY_ID, PAID_METAPROPERTY_ID},
};
use serde_json::json;

fn asset_with_metadata(metadata: HashMap<String, serde_json::Value>) -> Asset {
    Asset {
        id: "asset-1".to_string(),
        media_name: None,
        original_filename: None,
        metadata,
        properties: HashMap::new(),
    }
}

/// Test: Flat-key extraction reads the date from the metadata mapping
#[test]
fn test_flat_key_extraction() {
    let asset = asset_with_metadata(HashMap::from([
        ("Organic_expiry_date".to_string(), json!("2025-06-15")),
        ("Paid_expiry_date".to_string(), json!("2025-07-01")),
    ]));

    assert_eq!(
        MetadataShape::FlatKey.extract(&asset, ExpiryType::Organic),
        Some("2025-06-15".to_string())
    );
    assert_eq!(
        MetadataShape::FlatKey.extract(&asset, ExpiryType::Paid),
        Some("2025-07-01".to_string())
    );
}

/// Test: Flat-key extraction returns nothing for absent or non-string values
#[test]
fn test_flat_key_extraction_absent() {
    let asset = asset_with_metadata(HashMap::from([(
        "Paid_expiry_date".to_string(),
        json!(null),
    )]));

    assert_eq!(MetadataShape::FlatKey.extract(&asset, ExpiryType::Organic), None);
    assert_eq!(MetadataShape::FlatKey.extract(&asset, ExpiryType::Paid), None);
}

/// Test: Metadata-id extraction matches entries by identifier, not key name
#[test]
fn test_metadata_id_extraction_matches_by_id() {
    let asset = asset_with_metadata(HashMap::from([
        (
            "f1".to_string(),
            json!({ "id": ORGANIC_METAPROPERTY_ID, "value": "2025-01-01" }),
        ),
        (
            "f2".to_string(),
            json!({ "id": "some-other-field", "value": "2025-02-01" }),
        ),
    ]));

    assert_eq!(
        MetadataShape::MetadataId.extract(&asset, ExpiryType::Organic),
        Some("2025-01-01".to_string())
    );
}

/// Test: Metadata-id extraction returns nothing when the target id is absent
#[test]
fn test_metadata_id_extraction_absent_id() {
    let asset = asset_with_metadata(HashMap::from([(
        "f1".to_string(),
        json!({ "id": ORGANIC_METAPROPERTY_ID, "value": "2025-01-01" }),
    )]));

    assert_eq!(MetadataShape::MetadataId.extract(&asset, ExpiryType::Paid), None);
}

/// Test: Metadata-id extraction tolerates entries without id/value fields
#[test]
fn test_metadata_id_extraction_skips_malformed_entries() {
    let asset = asset_with_metadata(HashMap::from([
        ("f1".to_string(), json!("just a string")),
        ("f2".to_string(), json!({ "value": "2025-01-01" })),
        (
            "f3".to_string(),
            json!({ "id": PAID_METAPROPERTY_ID, "value": "2025-03-01" }),
        ),
    ]));

    assert_eq!(
        MetadataShape::MetadataId.extract(&asset, ExpiryType::Paid),
        Some("2025-03-01".to_string())
    );
}

/// Test: Top-level-property extraction reads the flattened property fields
#[test]
fn test_top_level_property_extraction() {
    let asset: Asset = serde_json::from_value(json!({
        "id": "asset-9",
        "mediaName": "Launch Video",
        "property_Organic_expiry_date": "2025-06-15",
        "property_Paid_expiry_date": "2025-08-01"
    }))
    .unwrap();

    assert_eq!(
        MetadataShape::TopLevelProperty.extract(&asset, ExpiryType::Organic),
        Some("2025-06-15".to_string())
    );
    assert_eq!(
        MetadataShape::TopLevelProperty.extract(&asset, ExpiryType::Paid),
        Some("2025-08-01".to_string())
    );
}

/// Test: Shapes never fall back to one another
#[test]
fn test_shapes_do_not_fall_back() {
    let asset: Asset = serde_json::from_value(json!({
        "id": "asset-9",
        "metadata": { "Organic_expiry_date": "2025-06-15" }
    }))
    .unwrap();

    assert_eq!(
        MetadataShape::TopLevelProperty.extract(&asset, ExpiryType::Organic),
        None,
        "property shape must not read the flat metadata key"
    );

    let asset: Asset = serde_json::from_value(json!({
        "id": "asset-9",
        "property_Organic_expiry_date": "2025-06-15"
    }))
    .unwrap();

    assert_eq!(
        MetadataShape::FlatKey.extract(&asset, ExpiryType::Organic),
        None,
        "flat-key shape must not read the top-level property field"
    );
}

/// Test: Only the property shape requires detail enrichment
#[test]
fn test_detail_fetch_requirement_follows_shape() {
    assert!(MetadataShape::TopLevelProperty.requires_detail_fetch());
    assert!(!MetadataShape::FlatKey.requires_detail_fetch());
    assert!(!MetadataShape::MetadataId.requires_detail_fetch());
}

/// Test: Display name falls back from media name to filename to id
#[test]
fn test_display_name_fallback_chain() {
    let asset = Asset {
        id: "asset-1".to_string(),
        media_name: Some("Summer Campaign".to_string()),
        original_filename: Some("summer.jpg".to_string()),
        metadata: HashMap::new(),
        properties: HashMap::new(),
    };
    assert_eq!(asset.display_name(), "Summer Campaign");

    let asset = Asset {
        id: "asset-1".to_string(),
        media_name: Some(String::new()),
        original_filename: Some("summer.jpg".to_string()),
        metadata: HashMap::new(),
        properties: HashMap::new(),
    };
    assert_eq!(asset.display_name(), "summer.jpg");

    let asset = Asset {
        id: "asset-1".to_string(),
        media_name: None,
        original_filename: None,
        metadata: HashMap::new(),
        properties: HashMap::new(),
    };
    assert_eq!(asset.display_name(), "asset-1");
}
