use crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};

use super::*;
use crate::frontend::AppMode;

#[tokio::test(start_paused = true)]
async fn test_scrolling_hides_trigger_until_quiet() {
    let mut app = test_app();
    render(&mut app, 80, 20);
    assert!(app.trigger_area.is_some());

    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    press(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(app.page.scroll_top(), 2);
    assert!(!app.scroll_tracker.state().visible);

    render(&mut app, 80, 20);
    assert!(app.trigger_area.is_none());

    app.handle_events_until(UIEvent::is_reveal_trigger).await;
    assert!(app.scroll_tracker.state().visible);
    assert!(app.scroll_tracker.state().progress > 0.0);

    render(&mut app, 80, 20);
    assert!(app.trigger_area.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_end_fills_progress() {
    let mut app = test_app();
    render(&mut app, 80, 20);

    press(&mut app, KeyCode::End, KeyModifiers::NONE);
    app.handle_events_until(UIEvent::is_reveal_trigger).await;

    let state = app.scroll_tracker.state();
    assert!(state.visible);
    assert!((state.progress - 100.0).abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn test_wheel_scrolls_page_when_chat_closed() {
    let mut app = test_app();
    render(&mut app, 80, 20);

    app.handle_event(UIEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }));

    assert_eq!(app.page.scroll_top(), 3);
    assert!(!app.scroll_tracker.state().visible);
}

#[test]
fn test_scroll_at_top_keeps_trigger() {
    let mut app = test_app();
    render(&mut app, 80, 20);

    press(&mut app, KeyCode::Up, KeyModifiers::NONE);
    assert!(app.scroll_tracker.state().visible);
}

#[test]
fn test_click_trigger_opens_chat() {
    let mut app = test_app();
    render(&mut app, 80, 20);

    let trigger = app.trigger_area.unwrap();
    click(&mut app, trigger);

    assert!(app.chat.is_open());
}

#[test]
fn test_click_header_controls() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
    render(&mut app, 80, 20);
    let controls = app.chat_controls.unwrap();

    click(&mut app, controls.sound);
    assert!(!app.chat.sound_enabled());

    click(&mut app, controls.clear);
    assert!(app.chat.messages().is_empty());

    click(&mut app, controls.close);
    assert!(!app.chat.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_click_send() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
    let screen = render(&mut app, 80, 20);
    assert!(screen.contains("[send]"));
    let send = app.chat_controls.unwrap().send;

    // Nothing typed yet
    click(&mut app, send);
    assert_eq!(app.chat.messages().len(), 1);
    assert!(!app.chat.is_typing());

    type_text(&mut app, "projects");
    click(&mut app, send);

    assert_eq!(app.chat.messages().len(), 2);
    assert!(app.chat.is_typing());
    assert_eq!(app.chat.input_value(), "");
    assert!(app.text_input.lines().concat().is_empty());

    app.handle_events_until(UIEvent::is_bot_reply).await;
    assert_eq!(app.chat.messages().len(), 3);
}

#[test]
fn test_blank_enter_keeps_chat_idle() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert!(!app.chat.is_typing());
    assert_eq!(app.chat.messages().len(), 1);
}

#[test]
fn test_q_types_into_open_chat() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
    type_text(&mut app, "q");

    assert_eq!(app.mode, AppMode::Portfolio);
    assert_eq!(app.chat.input_value(), "q");
}

#[test]
fn test_tabs_and_quit() {
    let mut app = test_app();

    press(&mut app, KeyCode::F(2), KeyModifiers::NONE);
    assert_eq!(app.mode, AppMode::Logs);

    press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
    assert_eq!(app.mode, AppMode::Portfolio);

    press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(app.mode, AppMode::Quit);
}

#[tokio::test(start_paused = true)]
async fn test_growing_terminal_resets_progress() {
    let mut app = test_app();
    render(&mut app, 80, 20);

    press(&mut app, KeyCode::End, KeyModifiers::NONE);
    app.handle_events_until(UIEvent::is_reveal_trigger).await;
    assert!((app.scroll_tracker.state().progress - 100.0).abs() < f64::EPSILON);

    // Tall enough that nothing scrolls
    render(&mut app, 80, 200);
    assert_eq!(app.page.scroll_top(), 0);
    assert!(app.scroll_tracker.state().progress.abs() < f64::EPSILON);
    assert!(!app.scroll_tracker.state().visible);

    app.handle_events_until(UIEvent::is_reveal_trigger).await;
    assert!(app.scroll_tracker.state().visible);

    render(&mut app, 80, 200);
    assert!(app.trigger_area.is_some());
    assert!(app.scroll_tracker.state().progress.abs() < f64::EPSILON);
}
