use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::frontend::{App, UIEvent};

/// Keys while the chat window is open
pub fn on_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            // `Ctrl-s` to toggle sound cues
            KeyCode::Char('s') => return app.send_ui_event(UIEvent::ToggleSound),
            // `Ctrl-l` to clear the history
            KeyCode::Char('l') => return app.send_ui_event(UIEvent::ClearHistory),
            _ => (),
        }
    }

    match key.code {
        KeyCode::Esc => app.send_ui_event(UIEvent::CloseChat),
        KeyCode::Enter => {
            if app.chat.submit() {
                app.reset_text_input();
            }
        }
        KeyCode::PageUp => app.chat.scroll_up(),
        KeyCode::PageDown => app.chat.scroll_down(),
        _ => {
            app.text_input.input(key);
            app.chat.set_input(app.text_input.lines().join("\n"));
        }
    }
}
