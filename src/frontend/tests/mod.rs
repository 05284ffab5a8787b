use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::{catalog::ContentCatalog, config::Config, sound::SoundFeedback};

use super::{App, UIEvent};

mod interaction;

fn test_app() -> App<'static> {
    App::new(
        &Config::default(),
        Arc::new(ContentCatalog::embedded().unwrap()),
        SoundFeedback::silent(),
    )
}

/// Draws the whole app and returns the screen as text, one row per line
fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(UIEvent::Input(KeyEvent::new(code, modifiers)));
    app.handle_pending_events();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

fn click(app: &mut App, rect: Rect) {
    app.handle_event(UIEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    }));
    app.handle_pending_events();
}
