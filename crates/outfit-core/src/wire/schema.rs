//! Wire Schemas
//!
//! Request and response shapes of the outfit backend, named in client
//! (camelCase) convention. Conversion to and from the backend's snake_case
//! happens on the JSON value, see [`super::case`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{null_as_default, Item, Layer, OutfitId, Season};

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn optional_season<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Season>, D::Error> {
    Ok(blank_as_none(deserializer)?.map(|s| Season::parse(&s)))
}

/// Timestamp from an RFC 3339 string or a naive datetime taken as UTC.
/// Anything else decodes to `None` rather than failing the whole record.
fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Placement of one wardrobe item as sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItemRecord {
    /// Foreign key of the wardrobe item
    pub clothing_item_id: u64,
    pub layer: Layer,
    pub position_x: f64,
    pub position_y: f64,
    pub size_width: f64,
    pub size_height: f64,
    pub rotation: f64,
    pub z_index: i32,
}

/// Body of `POST /outfits/`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    pub items: Vec<PlacedItemRecord>,
}

/// Body of `PATCH /outfits/{id}/`; only present fields are sent
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PlacedItemRecord>>,
}

/// Placement record returned by the backend, with the item embedded
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItemResponse {
    pub clothing_item: Item,
    pub layer: Layer,
    pub position_x: f64,
    pub position_y: f64,
    pub size_width: f64,
    pub size_height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub z_index: i32,
}

/// Full outfit as returned by create, read and update
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    pub id: OutfitId,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "optional_season")]
    pub season: Option<Season>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub preview_image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PlacedItemResponse>,
}

/// Outfit entry of the list endpoints (history and calendar)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSummary {
    pub id: OutfitId,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "optional_season")]
    pub season: Option<Season>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub preview_image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn summary(created_at: Value) -> OutfitSummary {
        serde_json::from_value(json!({
            "id": 42,
            "name": "Office",
            "createdAt": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_timestamps_with_offset() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(summary(json!("2025-03-01T09:00:00Z")).created_at, Some(expected));
        assert_eq!(summary(json!("2025-03-01T10:00:00+01:00")).created_at, Some(expected));
    }

    #[test]
    fn test_naive_timestamps_read_as_utc() {
        let created = summary(json!("2025-03-01T10:00:00.123456")).created_at.unwrap();
        assert_eq!(created.format("%Y-%m-%d %H:%M:%S%.6f").to_string(), "2025-03-01 10:00:00.123456");
        assert_eq!(
            summary(json!("2025-03-01 10:00:00")).created_at,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unreadable_timestamps_do_not_fail_the_record() {
        for raw in [json!("yesterday"), json!(""), json!(1740823200), Value::Null] {
            let outfit = summary(raw);
            assert_eq!(outfit.name, "Office");
            assert_eq!(outfit.created_at, None);
        }
        let outfit: OutfitResponse = serde_json::from_value(json!({
            "id": 7,
            "name": "Gym",
            "createdAt": "2025-03-01T10:00:00",
            "updatedAt": "not a date",
        }))
        .unwrap();
        assert!(outfit.created_at.is_some());
        assert_eq!(outfit.updated_at, None);
    }
}
