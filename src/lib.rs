pub mod catalog;
pub mod chat;
pub mod chat_message;
pub mod config;
// Export frontend module
pub mod frontend;
pub mod response_engine;
pub mod rich_text;
pub mod scroll_tracker;
pub mod sound;
