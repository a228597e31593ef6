//! Outfit Models
//!
//! Wardrobe items, their placement on the canvas, and the outfit aggregate.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::layer::Layer;

/// Name given to a fresh, unsaved outfit
pub const UNTITLED_OUTFIT: &str = "Untitled Outfit";

/// Identifier accepted as either a JSON number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn numeric_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// `null` becomes the type's default instead of an error
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wardrobe item identifier (also the backend foreign key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        numeric_id(deserializer).map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Saved outfit identifier, assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OutfitId(pub u64);

impl<'de> Deserialize<'de> for OutfitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        numeric_id(deserializer).map(OutfitId)
    }
}

impl fmt::Display for OutfitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Season an item or outfit is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    /// Any season (also used for "none" and unknown values)
    #[default]
    #[serde(other)]
    All,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::All => "all",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "spring" => Season::Spring,
            "summer" => Season::Summer,
            "fall" | "autumn" => Season::Fall,
            "winter" => Season::Winter,
            _ => Season::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::All => "All Seasons",
        }
    }
}

/// Occasions offered by the save form
pub const OCCASIONS: &[&str] = &[
    "casual", "work", "formal", "party", "date", "gym", "outdoor", "beach",
];

/// A wardrobe item as offered by the palette
///
/// Immutable once fetched; the palette is replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(default, alias = "itemImage", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Color swatches, most prominent first
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: Season,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Canvas-space position in pixels (top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Rendered size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An item committed onto the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub item: Item,
    pub layer: Layer,
    pub position: Position,
    pub size: Size,
    /// Degrees, kept in [0, 360) by the canvas controls
    pub rotation: f64,
    /// Paint order; higher paints on top and is hit first
    pub z_index: i32,
}

impl PlacedItem {
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

/// A named, saveable collection of placed items
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    /// Absent until first saved
    pub id: Option<OutfitId>,
    pub name: String,
    pub items: Vec<PlacedItem>,
    pub occasion: Option<String>,
    pub season: Option<Season>,
    /// Date-only or ISO datetime string as the backend stores it
    pub scheduled_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub preview_image_url: Option<String>,
}

impl Default for Outfit {
    fn default() -> Self {
        Self::untitled()
    }
}

impl Outfit {
    /// Empty outfit shown when entering create mode or after a clear
    pub fn untitled() -> Self {
        Self {
            id: None,
            name: UNTITLED_OUTFIT.to_string(),
            items: Vec::new(),
            occasion: None,
            season: None,
            scheduled_date: None,
            created_at: None,
            updated_at: None,
            preview_image_url: None,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|placed| placed.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn count_in_layer(&self, layer: Layer) -> usize {
        self.items.iter().filter(|placed| placed.layer == layer).count()
    }
}

/// Partial outfit for update calls; `None` fields are left untouched server-side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutfitPatch {
    pub name: Option<String>,
    pub occasion: Option<String>,
    pub season: Option<Season>,
    pub scheduled_date: Option<String>,
    pub items: Option<Vec<PlacedItem>>,
}

impl OutfitPatch {
    /// Patch carrying every field the outfit has set
    pub fn from_outfit(outfit: &Outfit) -> Self {
        Self {
            name: Some(outfit.name.clone()),
            occasion: outfit.occasion.clone(),
            season: outfit.season,
            scheduled_date: outfit.scheduled_date.clone(),
            items: Some(outfit.items.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_id_accepts_number_or_string() {
        let a: ItemId = serde_json::from_value(json!(7)).unwrap();
        let b: ItemId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_value::<ItemId>(json!("shirt-7")).is_err());
    }

    #[test]
    fn test_item_deserialization_defaults() {
        let item: Item = serde_json::from_value(json!({
            "id": "3",
            "itemImage": "items/shirt.png",
            "category": "Shirt",
            "colors": null,
            "season": "none"
        }))
        .unwrap();
        assert_eq!(item.id, ItemId(3));
        assert_eq!(item.image_url, "items/shirt.png");
        assert!(item.colors.is_empty());
        assert_eq!(item.season, Season::All);
        assert!(item.brand.is_none());
    }

    #[test]
    fn test_season_parse() {
        assert_eq!(Season::parse("Winter"), Season::Winter);
        assert_eq!(Season::parse("autumn"), Season::Fall);
        assert_eq!(Season::parse(""), Season::All);
    }

    #[test]
    fn test_untitled_outfit() {
        let outfit = Outfit::untitled();
        assert_eq!(outfit.name, UNTITLED_OUTFIT);
        assert!(outfit.items.is_empty());
        assert!(outfit.id.is_none());
    }
}
