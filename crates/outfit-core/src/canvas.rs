//! Canvas Gestures
//!
//! Pointer handling for the outfit canvas, kept free of any browser types so
//! it can be driven from tests. A drag is two-phase: the live pointer delta
//! stays in the gesture and only lands in the builder state on release.
//! A resize commits on every move.

use crate::builder::BuilderState;
use crate::model::{ItemId, PlacedItem, Position, Size};

/// Degrees added by one press of the rotate control
pub const ROTATION_STEP: f64 = 15.0;
/// Smallest width or height a resize may produce
pub const MIN_ITEM_DIMENSION: f64 = 50.0;
/// Vertical pointer travel that doubles the size
pub const RESIZE_SENSITIVITY: f64 = 200.0;
/// Pointer travel before a press on an item becomes a drag
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Pointer location in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Items in paint order: ascending z-index, ties in insertion order
pub fn render_order(items: &[PlacedItem]) -> Vec<&PlacedItem> {
    let mut ordered: Vec<&PlacedItem> = items.iter().collect();
    ordered.sort_by_key(|placed| placed.z_index);
    ordered
}

/// Rotation after one step of the rotate control
pub fn rotated(rotation: f64) -> f64 {
    (rotation + ROTATION_STEP).rem_euclid(360.0)
}

/// Size for a resize that started at `start_y`; dragging upward enlarges
pub fn resized(start: Size, start_y: f64, current_y: f64) -> Size {
    let scale = 1.0 + (start_y - current_y) / RESIZE_SENSITIVITY;
    Size::new(
        (start.width * scale).max(MIN_ITEM_DIMENSION),
        (start.height * scale).max(MIN_ITEM_DIMENSION),
    )
}

/// State change a gesture asks the builder to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    None,
    /// Select the item and bring it to front
    Focus { id: ItemId },
    Resize { id: ItemId, size: Size },
    /// Commit a finished drag as stored position + delta
    Move { id: ItemId, delta: Point },
}

/// Active pointer gesture; one per pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pressed on an item body, not yet past the drag threshold
    Pending { id: ItemId, origin: Point },
    Dragging { id: ItemId, origin: Point, delta: Point },
    Resizing { id: ItemId, start_y: f64, start_size: Size },
}

impl Gesture {
    /// Item the gesture is acting on
    pub fn active_item(&self) -> Option<ItemId> {
        match *self {
            Gesture::Idle => None,
            Gesture::Pending { id, .. }
            | Gesture::Dragging { id, .. }
            | Gesture::Resizing { id, .. } => Some(id),
        }
    }

    pub fn is_dragging(&self, item: ItemId) -> bool {
        matches!(*self, Gesture::Dragging { id, .. } if id == item)
    }

    /// Visual offset to add to the stored position of `item` while rendering
    pub fn drag_offset(&self, item: ItemId) -> Point {
        match *self {
            Gesture::Dragging { id, delta, .. } if id == item => delta,
            _ => Point::default(),
        }
    }

    /// Where `placed` is drawn right now
    pub fn render_position(&self, placed: &PlacedItem) -> Position {
        let offset = self.drag_offset(placed.id());
        placed.position.offset(offset.x, offset.y)
    }

    /// Press on an item body. A gesture still in flight is abandoned without committing.
    pub fn press_body(&mut self, id: ItemId, at: Point) -> GestureEffect {
        *self = Gesture::Pending { id, origin: at };
        GestureEffect::Focus { id }
    }

    /// Press on an item's resize handle
    pub fn press_resize(&mut self, id: ItemId, at: Point, current_size: Size) -> GestureEffect {
        *self = Gesture::Resizing {
            id,
            start_y: at.y,
            start_size: current_size,
        };
        GestureEffect::Focus { id }
    }

    pub fn pointer_move(&mut self, at: Point) -> GestureEffect {
        match *self {
            Gesture::Idle => GestureEffect::None,
            Gesture::Pending { id, origin } => {
                let dx = at.x - origin.x;
                let dy = at.y - origin.y;
                if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
                    *self = Gesture::Dragging {
                        id,
                        origin,
                        delta: Point::new(dx, dy),
                    };
                }
                GestureEffect::None
            }
            Gesture::Dragging { id, origin, .. } => {
                *self = Gesture::Dragging {
                    id,
                    origin,
                    delta: Point::new(at.x - origin.x, at.y - origin.y),
                };
                GestureEffect::None
            }
            Gesture::Resizing { id, start_y, start_size } => GestureEffect::Resize {
                id,
                size: resized(start_size, start_y, at.y),
            },
        }
    }

    /// Pointer released; ends the gesture
    pub fn release(&mut self) -> GestureEffect {
        let effect = match *self {
            Gesture::Dragging { id, delta, .. } => GestureEffect::Move { id, delta },
            _ => GestureEffect::None,
        };
        *self = Gesture::Idle;
        effect
    }

    /// Drop the gesture without committing anything
    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }
}

impl BuilderState {
    /// Apply a gesture effect. Effects on items that no longer exist are no-ops.
    pub fn apply_gesture(&self, effect: GestureEffect) -> Self {
        match effect {
            GestureEffect::None => self.clone(),
            GestureEffect::Focus { id } => self.select_and_focus(id),
            GestureEffect::Resize { id, size } => self.update_size(id, size),
            GestureEffect::Move { id, delta } => match self.item(id) {
                Some(placed) => {
                    log::debug!("Committing drag of item {} by ({}, {})", id, delta.x, delta.y);
                    let position = placed.position.offset(delta.x, delta.y);
                    self.update_position(id, position)
                }
                None => self.clone(),
            },
        }
    }

    /// Clicking an item selects it and lifts it above everything else
    pub fn select_and_focus(&self, id: ItemId) -> Self {
        self.set_selected(Some(id)).bring_to_front(id)
    }

    /// Rotate control pressed on `id`
    pub fn rotate_step(&self, id: ItemId) -> Self {
        match self.item(id) {
            Some(placed) => self.update_rotation(id, rotated(placed.rotation)),
            None => self.clone(),
        }
    }
}
