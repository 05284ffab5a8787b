use crossterm::event::{KeyEvent, MouseEvent};

use crate::chat::PendingReply;

use super::app::AppMode;

// Event handling
#[derive(Debug, Clone, strum_macros::Display, strum_macros::EnumIs)]
pub enum UIEvent {
    /// A key is pressed
    Input(KeyEvent),
    /// The mouse moved, clicked or scrolled
    Mouse(MouseEvent),
    /// A frontend tick event to trigger updates, etc
    Tick,
    /// The trigger reveal timer fired, tagged with the scroll generation that scheduled it
    RevealTrigger(u64),
    /// A deferred bot reply is due
    BotReply(PendingReply),
    /// Open the assistant window
    OpenChat,
    /// Close the assistant window
    CloseChat,
    /// Remove every message from the assistant window
    ClearHistory,
    /// Flip the sound cues on or off
    ToggleSound,
    /// Change the view mode of the frontend
    ChangeMode(AppMode),
    /// Quit from the frontend
    Quit,
}

impl From<KeyEvent> for UIEvent {
    fn from(key: KeyEvent) -> Self {
        Self::Input(key)
    }
}

impl From<MouseEvent> for UIEvent {
    fn from(mouse: MouseEvent) -> Self {
        Self::Mouse(mouse)
    }
}

impl From<PendingReply> for UIEvent {
    fn from(reply: PendingReply) -> Self {
        Self::BotReply(reply)
    }
}
