mod catalog;
mod contact;
mod halfblock;
mod hero;
mod status_bar;

pub use catalog::{CatalogWidget, THUMB_COLS, THUMB_ROWS};
pub use contact::ContactMenuWidget;
pub use halfblock::CanvasCache;
pub use hero::HeroWidget;
pub use status_bar::StatusBarWidget;
