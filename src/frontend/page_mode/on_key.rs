use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::frontend::{chat_mode, App, UIEvent};

const WHEEL_ROWS: isize = 3;

pub fn on_key(app: &mut App, key: KeyEvent) {
    if app.chat.is_open() {
        return chat_mode::on_key(app, key);
    }

    // `Ctrl-o` to open the assistant
    if key.code == KeyCode::Char('o') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return app.send_ui_event(UIEvent::OpenChat);
    }

    #[allow(clippy::cast_possible_wrap)]
    let page_size = app.page.page_size() as isize;

    match key.code {
        KeyCode::Char('q') => app.send_ui_event(UIEvent::Quit),
        KeyCode::Char('a') => app.send_ui_event(UIEvent::OpenChat),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_page(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_page(1),
        KeyCode::PageUp => app.scroll_page(-page_size),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(page_size),
        KeyCode::Home => app.scroll_page(isize::MIN),
        KeyCode::End => app.scroll_page(isize::MAX),
        _ => (),
    }
}

pub fn on_mouse(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown if !app.chat.is_open() => app.scroll_page(WHEEL_ROWS),
        MouseEventKind::ScrollUp if !app.chat.is_open() => app.scroll_page(-WHEEL_ROWS),
        MouseEventKind::ScrollDown => app.chat.scroll_down(),
        MouseEventKind::ScrollUp => app.chat.scroll_up(),
        MouseEventKind::Down(MouseButton::Left) => on_click(app, position),
        _ => (),
    }
}

fn on_click(app: &mut App, position: Position) {
    if app.chat.is_open() {
        if let Some(controls) = app.chat_controls {
            if controls.sound.contains(position) {
                return app.send_ui_event(UIEvent::ToggleSound);
            }
            if controls.clear.contains(position) {
                return app.send_ui_event(UIEvent::ClearHistory);
            }
            if controls.close.contains(position) {
                return app.send_ui_event(UIEvent::CloseChat);
            }
            if controls.send.contains(position) {
                if app.chat.submit() {
                    app.reset_text_input();
                }
                return;
            }
        }
    }

    if app
        .trigger_area
        .is_some_and(|trigger| trigger.contains(position))
    {
        app.send_ui_event(UIEvent::OpenChat);
    }
}
