//! Core Error Type
//!
//! Every failure the builder can surface to the user.

use thiserror::Error;

use crate::model::{ItemId, Layer, OutfitId};

/// Common result type for outfit operations
pub type OutfitResult<T> = Result<T, OutfitError>;

/// Errors raised by builder commands and the persistence adapter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutfitError {
    /// Layer already holds its maximum number of items
    #[error("The {} layer is full", .0.label())]
    LayerFull(Layer),
    /// Wardrobe item is already on the canvas
    #[error("Item {0} is already in this outfit")]
    AlreadyPlaced(ItemId),
    #[error("Please enter an outfit name")]
    MissingName,
    #[error("Please add at least one item to your outfit")]
    EmptyOutfit,
    #[error("Outfit {0} not found")]
    NotFound(OutfitId),
    /// Backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not match the expected schema
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl OutfitError {
    /// Local constraint violations are caught before any state change or request
    pub fn is_constraint(&self) -> bool {
        matches!(
            self,
            OutfitError::LayerFull(_)
                | OutfitError::AlreadyPlaced(_)
                | OutfitError::MissingName
                | OutfitError::EmptyOutfit
        )
    }
}

impl From<reqwest::Error> for OutfitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OutfitError::Decode(err.to_string())
        } else {
            OutfitError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OutfitError {
    fn from(err: serde_json::Error) -> Self {
        OutfitError::Decode(err.to_string())
    }
}
