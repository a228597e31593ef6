//! Palette Views
//!
//! Filtering of wardrobe items for the sidebar, and sequencing of palette
//! fetches so an older response never overwrites a newer one.

use std::cell::Cell;

use crate::layer::Layer;
use crate::model::Item;

/// Case-insensitive substring match on category, brand, or any color
pub fn matches_query(item: &Item, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&query);
    hit(&item.category)
        || item.brand.as_deref().is_some_and(hit)
        || item.colors.iter().any(|color| hit(color))
}

/// Items offered under `layer` for the current search query
pub fn layer_view<'a>(palette: &'a [Item], layer: Layer, query: &str) -> Vec<&'a Item> {
    palette
        .iter()
        .filter(|item| layer.matches_category(&item.category) && matches_query(item, query))
        .collect()
}

/// Handle for one issued palette request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteTicket(u64);

/// Monotonic counter; only the latest ticket may apply its result
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket
    pub fn issue(&self) -> PaletteTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        PaletteTicket(next)
    }

    pub fn is_current(&self, ticket: PaletteTicket) -> bool {
        ticket.0 == self.latest.get()
    }
}
