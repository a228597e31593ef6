//! Persistence Mapping
//!
//! Converts between the in-memory [`Outfit`] and the backend's wire format.
//! Outbound values are serialized in camelCase then have every key renamed
//! to snake_case; inbound JSON goes the other way before deserialization.

pub mod case;
pub mod schema;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use case::{keys_to_camel_case, keys_to_snake_case, to_camel_case, to_snake_case};
pub use schema::{
    OutfitPatchRequest, OutfitRequest, OutfitResponse, OutfitSummary, PlacedItemRecord,
    PlacedItemResponse,
};

use crate::error::OutfitResult;
use crate::model::{Item, Outfit, OutfitPatch, PlacedItem, Position, Size};

/// Serialize a request body and rename its keys to backend convention
pub fn to_wire<T: Serialize>(body: &T) -> OutfitResult<Value> {
    Ok(keys_to_snake_case(serde_json::to_value(body)?))
}

/// Rename backend keys to client convention and deserialize
pub fn from_wire<T: DeserializeOwned>(value: Value) -> OutfitResult<T> {
    Ok(serde_json::from_value(keys_to_camel_case(value))?)
}

/// Resolve an item image reference against the media origin.
///
/// Absolute `http(s)` URLs are kept, root-relative paths get the origin
/// prepended, bare storage keys are served from `/media/`.
pub fn normalize_image_url(url: &str, media_origin: &str) -> String {
    let url = url.trim();
    let origin = media_origin.trim_end_matches('/');
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        format!("{origin}/media/{url}")
    }
}

/// Palette item with its image URL resolved
pub fn normalize_item(mut item: Item, media_origin: &str) -> Item {
    item.image_url = normalize_image_url(&item.image_url, media_origin);
    item
}

fn record(placed: &PlacedItem) -> PlacedItemRecord {
    PlacedItemRecord {
        clothing_item_id: placed.item.id.0,
        layer: placed.layer,
        position_x: placed.position.x,
        position_y: placed.position.y,
        size_width: placed.size.width,
        size_height: placed.size.height,
        rotation: placed.rotation,
        z_index: placed.z_index,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Request body for creating `outfit`
pub fn outfit_request(outfit: &Outfit) -> OutfitRequest {
    OutfitRequest {
        name: outfit.name.trim().to_string(),
        occasion: non_blank(&outfit.occasion),
        season: outfit.season,
        scheduled_date: non_blank(&outfit.scheduled_date),
        items: outfit.items.iter().map(record).collect(),
    }
}

/// Request body for a partial update
pub fn patch_request(patch: &OutfitPatch) -> OutfitPatchRequest {
    OutfitPatchRequest {
        name: patch.name.as_deref().map(|name| name.trim().to_string()),
        occasion: non_blank(&patch.occasion),
        season: patch.season,
        scheduled_date: non_blank(&patch.scheduled_date),
        items: patch.items.as_ref().map(|items| items.iter().map(record).collect()),
    }
}

impl PlacedItemResponse {
    fn into_placed(self, media_origin: &str) -> PlacedItem {
        PlacedItem {
            item: normalize_item(self.clothing_item, media_origin),
            layer: self.layer,
            position: Position::new(self.position_x, self.position_y),
            size: Size::new(self.size_width, self.size_height),
            rotation: self.rotation,
            z_index: self.z_index,
        }
    }
}

impl OutfitResponse {
    /// Flatten into the in-memory outfit, embedding each placement's item
    pub fn into_outfit(self, media_origin: &str) -> Outfit {
        Outfit {
            id: Some(self.id),
            name: self.name,
            items: self
                .items
                .into_iter()
                .map(|placed| placed.into_placed(media_origin))
                .collect(),
            occasion: self.occasion,
            season: self.season,
            scheduled_date: self.scheduled_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
            preview_image_url: self
                .preview_image_url
                .map(|url| normalize_image_url(&url, media_origin)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuilderState;
    use crate::model::{ItemId, Layer, OutfitId, Season};
    use serde_json::json;

    const ORIGIN: &str = "http://localhost:8000";

    fn item(id: u64, category: &str) -> Item {
        Item {
            id: ItemId(id),
            image_url: format!("{ORIGIN}/media/items/{id}.png"),
            category: category.to_string(),
            colors: vec!["navy".to_string()],
            season: Season::Winter,
            brand: None,
        }
    }

    fn sample_outfit() -> Outfit {
        let state = BuilderState::new()
            .place_item(&item(1, "T-Shirt"), Layer::Tops)
            .unwrap()
            .place_item(&item(2, "Jeans"), Layer::Bottoms)
            .unwrap()
            .update_rotation(ItemId(1), 45.0);
        let mut outfit = state.outfit;
        outfit.name = "  Friday  ".to_string();
        outfit.occasion = Some("casual".to_string());
        outfit.season = Some(Season::Winter);
        outfit.scheduled_date = Some(String::new());
        outfit
    }

    /// Backend echo: the stored record, with items embedded from the palette
    fn echo(request: &Value, palette: &[Item]) -> Value {
        let items: Vec<Value> = request["items"]
            .as_array()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let id = record["clothing_item_id"].as_u64().unwrap();
                let embedded = palette.iter().find(|item| item.id.0 == id).unwrap();
                let mut placed = record.clone();
                let map = placed.as_object_mut().unwrap();
                map.remove("clothing_item_id");
                map.insert("id".into(), json!(100 + i));
                map.insert(
                    "clothing_item".into(),
                    keys_to_snake_case(serde_json::to_value(embedded).unwrap()),
                );
                placed
            })
            .collect();
        let mut response = request.clone();
        let map = response.as_object_mut().unwrap();
        map.insert("id".into(), json!(42));
        map.insert("items".into(), Value::Array(items));
        map.insert("created_at".into(), json!("2025-03-01T10:00:00Z"));
        map.insert("updated_at".into(), json!("2025-03-01T10:00:00Z"));
        response
    }

    #[test]
    fn test_request_uses_backend_keys() {
        let wire = to_wire(&outfit_request(&sample_outfit())).unwrap();

        assert_eq!(wire["name"], "Friday");
        assert_eq!(wire["season"], "winter");
        assert!(wire.get("scheduled_date").is_none());
        let first = &wire["items"][0];
        assert_eq!(first["clothing_item_id"], 1);
        assert_eq!(first["position_x"], 100.0);
        assert_eq!(first["size_height"], 220.0);
        assert_eq!(first["z_index"], 1);
        assert_eq!(first["rotation"], 45.0);
        assert!(first.get("positionX").is_none());
    }

    #[test]
    fn test_round_trip_through_echo() {
        let outfit = sample_outfit();
        let palette = vec![item(1, "T-Shirt"), item(2, "Jeans")];
        let wire = to_wire(&outfit_request(&outfit)).unwrap();

        let response: OutfitResponse = from_wire(echo(&wire, &palette)).unwrap();
        let restored = response.into_outfit(ORIGIN);

        assert_eq!(restored.id, Some(OutfitId(42)));
        assert_eq!(restored.name, "Friday");
        assert_eq!(restored.occasion.as_deref(), Some("casual"));
        assert_eq!(restored.season, Some(Season::Winter));
        assert!(restored.scheduled_date.is_none());
        assert!(restored.updated_at.is_some());
        assert_eq!(restored.items, outfit.items);
    }

    #[test]
    fn test_patch_sends_only_present_fields() {
        let patch = OutfitPatch {
            name: Some("Renamed".to_string()),
            ..OutfitPatch::default()
        };
        let wire = to_wire(&patch_request(&patch)).unwrap();
        assert_eq!(wire, json!({ "name": "Renamed" }));

        let full = to_wire(&patch_request(&OutfitPatch::from_outfit(&sample_outfit()))).unwrap();
        assert_eq!(full["items"].as_array().unwrap().len(), 2);
        assert_eq!(full["items"][1]["clothing_item_id"], 2);
    }

    #[test]
    fn test_response_tolerates_nulls_and_string_ids() {
        let response: OutfitResponse = from_wire(json!({
            "id": "9",
            "name": "Rainy day",
            "occasion": "",
            "season": null,
            "scheduled_date": "2025-12-25",
            "preview_image_url": "previews/9.png",
            "items": [{
                "id": 1,
                "clothing_item": {
                    "id": 5,
                    "image_url": "items/coat.png",
                    "category": "Coat",
                    "colors": null,
                    "season": "winter",
                    "brand": null
                },
                "layer": "outer",
                "position_x": 80,
                "position_y": 20,
                "size_width": 240,
                "size_height": 280
            }]
        }))
        .unwrap();
        let outfit = response.into_outfit(ORIGIN);

        assert_eq!(outfit.id, Some(OutfitId(9)));
        assert!(outfit.occasion.is_none());
        assert!(outfit.season.is_none());
        assert_eq!(outfit.scheduled_date.as_deref(), Some("2025-12-25"));
        assert_eq!(
            outfit.preview_image_url.as_deref(),
            Some("http://localhost:8000/media/previews/9.png")
        );
        let coat = &outfit.items[0];
        assert_eq!(coat.item.image_url, "http://localhost:8000/media/items/coat.png");
        assert_eq!(coat.layer, Layer::Outer);
        assert_eq!(coat.rotation, 0.0);
        assert_eq!(coat.z_index, 0);
    }

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(
            normalize_image_url("https://cdn.example.com/a.png", ORIGIN),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            normalize_image_url("/media/a.png", ORIGIN),
            "http://localhost:8000/media/a.png"
        );
        assert_eq!(
            normalize_image_url("items/a.png", "http://localhost:8000/"),
            "http://localhost:8000/media/items/a.png"
        );
        assert_eq!(normalize_image_url("", ORIGIN), "");
    }
}
