//! Garment Layers
//!
//! Fixed layer table: capacity, default placement size, and the keyword
//! heuristic that maps free-form categories onto layers.

use serde::{Deserialize, Serialize};

use crate::model::Size;

/// Semantic garment layer an item is placed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Tops,
    Bottoms,
    Mid,
    Outer,
    Accessory,
}

impl Layer {
    /// Display order of the palette tabs
    pub const ALL: [Layer; 5] = [
        Layer::Tops,
        Layer::Bottoms,
        Layer::Mid,
        Layer::Outer,
        Layer::Accessory,
    ];

    /// Maximum number of items the layer may hold in one outfit
    pub fn capacity(&self) -> usize {
        match self {
            Layer::Tops => 2,
            Layer::Bottoms => 1,
            Layer::Mid => 3,
            Layer::Outer => 3,
            Layer::Accessory => 8,
        }
    }

    /// Size an item gets when first placed
    pub fn default_size(&self) -> Size {
        match self {
            Layer::Tops => Size::new(200.0, 220.0),
            Layer::Bottoms => Size::new(200.0, 240.0),
            Layer::Mid => Size::new(220.0, 240.0),
            Layer::Outer => Size::new(240.0, 280.0),
            Layer::Accessory => Size::new(100.0, 100.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Tops => "tops",
            Layer::Bottoms => "bottoms",
            Layer::Mid => "mid",
            Layer::Outer => "outer",
            Layer::Accessory => "accessory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Layer::Tops => "Tops",
            Layer::Bottoms => "Bottoms",
            Layer::Mid => "Mid-Layer",
            Layer::Outer => "Outer Layer",
            Layer::Accessory => "Accessories",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Layer::Tops => "Shirts, blouses, t-shirts, and other upper body clothing",
            Layer::Bottoms => "Pants, jeans, skirts, shorts, and other lower body clothing",
            Layer::Mid => "Sweaters, hoodies, cardigans, and mid-layer items",
            Layer::Outer => "Jackets, coats, blazers, and outerwear",
            Layer::Accessory => "Hats, scarves, belts, jewelry, bags, and shoes",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Layer::Tops => &["t-shirt", "shirt", "blouse", "top", "dress", "tank", "polo", "turtleneck"],
            Layer::Bottoms => &["pants", "jeans", "shorts", "skirt", "bottom", "trousers", "leggings"],
            Layer::Mid => &["sweater", "cardigan", "vest", "hoodie", "pullover", "sweatshirt"],
            Layer::Outer => &["jacket", "coat", "blazer", "parka", "outerwear", "windbreaker"],
            Layer::Accessory => &[
                "hat", "scarf", "belt", "jewelry", "bag", "shoes", "watch", "accessory", "socks", "tie",
            ],
        }
    }

    /// Best-effort substring match in either direction, case-insensitive
    pub fn matches_category(&self, category: &str) -> bool {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return false;
        }
        self.keywords()
            .iter()
            .any(|keyword| category.contains(keyword) || keyword.contains(category.as_str()))
    }
}

/// Every layer whose keyword table matches the category.
/// Empty means the category is unclassified and shows up nowhere.
pub fn classify_category(category: &str) -> Vec<Layer> {
    Layer::ALL
        .into_iter()
        .filter(|layer| layer.matches_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities() {
        assert_eq!(Layer::Tops.capacity(), 2);
        assert_eq!(Layer::Bottoms.capacity(), 1);
        assert_eq!(Layer::Mid.capacity(), 3);
        assert_eq!(Layer::Outer.capacity(), 3);
        assert_eq!(Layer::Accessory.capacity(), 8);
    }

    #[test]
    fn test_classify_common_categories() {
        assert_eq!(classify_category("Jeans"), vec![Layer::Bottoms]);
        assert_eq!(classify_category("Hoodie"), vec![Layer::Mid]);
        assert_eq!(classify_category("Winter Coat"), vec![Layer::Outer]);
        assert_eq!(classify_category("Blouse"), vec![Layer::Tops]);
        assert!(classify_category("Sunglasses case").is_empty());
        assert!(classify_category("   ").is_empty());
    }

    #[test]
    fn test_keyword_contains_category() {
        // "shirt" is a keyword and also contained in "t-shirt" and "sweatshirt"
        let layers = classify_category("shirt");
        assert!(layers.contains(&Layer::Tops));
        assert!(layers.contains(&Layer::Mid));
    }

    #[test]
    fn test_layer_serialization() {
        assert_eq!(serde_json::to_string(&Layer::Accessory).unwrap(), "\"accessory\"");
        let layer: Layer = serde_json::from_str("\"outer\"").unwrap();
        assert_eq!(layer, Layer::Outer);
    }
}
