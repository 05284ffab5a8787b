mod message_formatting;
mod on_key;
mod ui;

pub use message_formatting::{format_chat_message, format_chat_messages};
pub use on_key::on_key;
pub use ui::{ui, ChatControls};
