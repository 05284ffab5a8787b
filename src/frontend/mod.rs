#[cfg(test)]
mod tests;

mod app;
pub mod floating_trigger;
pub mod portfolio_page;
mod ui_event;

/// Different frontend ui modes
pub mod chat_mode;
mod logs_mode;
mod page_mode;

/// Let's be very strict about what to export
/// to avoid coupling frontend and the rest
pub use app::{App, AppMode};
pub use ui_event::UIEvent;
