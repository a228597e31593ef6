//! UI Components
//!
//! Reusable Leptos components.

mod builder_toolbar;
mod canvas_item;
mod confirm_button;
mod outfit_canvas;
mod outfit_history;
mod save_dialog;
mod toast_stack;
mod wardrobe_sidebar;

pub use builder_toolbar::BuilderToolbar;
pub use canvas_item::CanvasItem;
pub use confirm_button::ConfirmButton;
pub use outfit_canvas::OutfitCanvas;
pub use outfit_history::OutfitHistory;
pub use save_dialog::SaveDialog;
pub use toast_stack::ToastStack;
pub use wardrobe_sidebar::WardrobeSidebar;
