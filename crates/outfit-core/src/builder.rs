//! Builder Store
//!
//! Single source of truth for the outfit being composed, the wardrobe
//! palette, and the current selection. Every command takes the current
//! snapshot by reference and returns the next one; a command that does not
//! apply returns an unchanged copy.

use crate::error::{OutfitError, OutfitResult};
use crate::model::{Item, ItemId, Layer, Outfit, PlacedItem, Position, Season, Size};

/// Fixed canvas dimensions in pixels
pub const CANVAS_SIZE: Size = Size::new(400.0, 800.0);

/// Metadata merge for [`BuilderState::set_metadata`]; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitMetadata {
    pub name: Option<String>,
    pub occasion: Option<String>,
    pub season: Option<Season>,
    pub scheduled_date: Option<String>,
}

/// Immutable builder snapshot
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderState {
    /// Outfit under construction
    pub outfit: Outfit,
    /// Wardrobe items offered for placement
    pub palette: Vec<Item>,
    /// Transient selection, never persisted
    pub selected: Option<ItemId>,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderState {
    pub fn new() -> Self {
        Self {
            outfit: Outfit::untitled(),
            palette: Vec::new(),
            selected: None,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.outfit.item(id)
    }

    pub fn items_in_layer(&self, layer: Layer) -> impl Iterator<Item = &PlacedItem> {
        self.outfit.items.iter().filter(move |placed| placed.layer == layer)
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    pub fn can_place_in_layer(&self, layer: Layer) -> bool {
        self.outfit.count_in_layer(layer) < layer.capacity()
    }

    /// Replace the palette wholesale
    pub fn set_palette(&self, items: Vec<Item>) -> Self {
        Self {
            palette: items,
            ..self.clone()
        }
    }

    /// Commit a palette item onto the canvas, centered, on top, and selected
    pub fn place_item(&self, item: &Item, layer: Layer) -> OutfitResult<Self> {
        if !self.can_place_in_layer(layer) {
            log::warn!("Cannot add more items to layer: {}", layer.as_str());
            return Err(OutfitError::LayerFull(layer));
        }
        if self.outfit.contains(item.id) {
            log::warn!("Item {} is already on the canvas", item.id);
            return Err(OutfitError::AlreadyPlaced(item.id));
        }

        let size = layer.default_size();
        let z_index = self.outfit.items.iter().map(|p| p.z_index).max().unwrap_or(0) + 1;
        let placed = PlacedItem {
            item: item.clone(),
            layer,
            position: Position::new(
                CANVAS_SIZE.width / 2.0 - size.width / 2.0,
                CANVAS_SIZE.height / 2.0 - size.height / 2.0,
            ),
            size,
            rotation: 0.0,
            z_index,
        };

        let mut next = self.clone();
        next.outfit.items.push(placed);
        next.selected = Some(item.id);
        Ok(next)
    }

    pub fn remove_item(&self, id: ItemId) -> Self {
        let mut next = self.clone();
        next.outfit.items.retain(|placed| placed.id() != id);
        if next.selected == Some(id) {
            next.selected = None;
        }
        next
    }

    pub fn update_position(&self, id: ItemId, position: Position) -> Self {
        self.map_item(id, |placed| placed.position = position)
    }

    pub fn update_size(&self, id: ItemId, size: Size) -> Self {
        self.map_item(id, |placed| placed.size = size)
    }

    /// Stored as given; callers keep it in [0, 360)
    pub fn update_rotation(&self, id: ItemId, rotation: f64) -> Self {
        self.map_item(id, |placed| placed.rotation = rotation)
    }

    pub fn bring_to_front(&self, id: ItemId) -> Self {
        if !self.outfit.contains(id) {
            return self.clone();
        }
        let max = self.outfit.items.iter().map(|p| p.z_index).max().unwrap_or(0);
        let mut next = self.map_item(id, |placed| placed.z_index = max + 1);
        renormalize_z(&mut next.outfit.items);
        next
    }

    pub fn send_to_back(&self, id: ItemId) -> Self {
        if !self.outfit.contains(id) {
            return self.clone();
        }
        let min = self.outfit.items.iter().map(|p| p.z_index).min().unwrap_or(0);
        let mut next = self.map_item(id, |placed| placed.z_index = min - 1);
        renormalize_z(&mut next.outfit.items);
        next
    }

    /// Any id is accepted, present or not
    pub fn set_selected(&self, id: Option<ItemId>) -> Self {
        Self {
            selected: id,
            ..self.clone()
        }
    }

    /// Fresh untitled outfit; the palette is kept
    pub fn clear(&self) -> Self {
        Self {
            outfit: Outfit::untitled(),
            palette: self.palette.clone(),
            selected: None,
        }
    }

    pub fn set_metadata(&self, metadata: OutfitMetadata) -> Self {
        let mut next = self.clone();
        if let Some(name) = metadata.name {
            next.outfit.name = name;
        }
        if metadata.occasion.is_some() {
            next.outfit.occasion = metadata.occasion;
        }
        if metadata.season.is_some() {
            next.outfit.season = metadata.season;
        }
        if metadata.scheduled_date.is_some() {
            next.outfit.scheduled_date = metadata.scheduled_date;
        }
        next
    }

    /// Replace the outfit with one loaded for editing
    pub fn load_outfit(&self, outfit: Outfit) -> Self {
        Self {
            outfit,
            palette: self.palette.clone(),
            selected: None,
        }
    }

    /// Adopt identity and metadata from the backend's copy after a save,
    /// keeping the local placement as is
    pub fn mark_saved(&self, saved: &Outfit) -> Self {
        let mut next = self.clone();
        next.outfit.id = saved.id;
        next.outfit.name = saved.name.clone();
        next.outfit.occasion = saved.occasion.clone();
        next.outfit.season = saved.season;
        next.outfit.scheduled_date = saved.scheduled_date.clone();
        next.outfit.created_at = saved.created_at;
        next.outfit.updated_at = saved.updated_at;
        next.outfit.preview_image_url = saved.preview_image_url.clone();
        next
    }

    fn map_item(&self, id: ItemId, f: impl FnOnce(&mut PlacedItem)) -> Self {
        let mut next = self.clone();
        if let Some(placed) = next.outfit.items.iter_mut().find(|placed| placed.id() == id) {
            f(placed);
        }
        next
    }
}

/// Rewrite z-indices to 1..=N keeping the current order (ties by insertion)
fn renormalize_z(items: &mut [PlacedItem]) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| items[i].z_index);
    for (rank, index) in order.into_iter().enumerate() {
        items[index].z_index = rank as i32 + 1;
    }
}
