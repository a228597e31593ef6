//! Outfit Builder Core
//!
//! Everything the outfit builder decides without a browser: the wardrobe
//! model, layer rules, builder commands, canvas gestures, and persistence.

pub mod builder;
pub mod canvas;
pub mod config;
pub mod error;
pub mod layer;
pub mod model;
pub mod palette;
pub mod repository;
pub mod schedule;
pub mod session;
pub mod wire;

pub use builder::{BuilderState, OutfitMetadata, CANVAS_SIZE};
pub use canvas::{Gesture, GestureEffect, Point};
pub use config::ApiConfig;
pub use error::{OutfitError, OutfitResult};
pub use layer::{classify_category, Layer};
pub use model::{Item, ItemId, Outfit, OutfitId, OutfitPatch, PlacedItem, Position, Season, Size};
pub use repository::{CredentialStore, HttpBackend, OutfitRepository, PaletteSource};
pub use session::{BuilderMode, SaveForm, SessionUpdate};
