//! The portfolio page with the assistant floating over it
mod on_key;
mod ui;

pub use on_key::{on_key, on_mouse};
pub use ui::ui;
