use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::frontend::floating_trigger::{trigger_area, FloatingTrigger};
use crate::frontend::{chat_mode, App};

pub fn ui(f: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let [page_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    render_page(f, app, page_area);
    render_help(f, app, help_area);

    let scroll_state = app.scroll_tracker.state();
    if scroll_state.visible {
        let trigger = trigger_area(page_area);
        f.render_widget(FloatingTrigger::new(&scroll_state), trigger);
        app.trigger_area = Some(trigger);
    } else {
        app.trigger_area = None;
    }

    if app.chat.is_open() {
        chat_mode::ui(f, page_area, app);
    } else {
        app.chat_controls = None;
    }
}

fn render_page(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(app.page.title().to_string().bold())
        .borders(Borders::TOP)
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);

    app.resize_page(usize::from(inner.height));

    #[allow(clippy::cast_possible_truncation)]
    let scroll = app.page.scroll_top() as u16;
    let page = Paragraph::new(app.page.lines().to_vec())
        .block(block)
        .scroll((scroll, 0));

    f.render_widget(page, area);
}

fn render_help(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let help = if app.chat.is_open() {
        "Enter send | PgUp/PgDn history | ^s sound | ^l clear | Esc close | ^q quit"
    } else {
        "↑/↓ scroll | PgUp/PgDn page | ^o assistant | F2 logs | q quit"
    };

    f.render_widget(Line::from(help).style(Color::Gray).centered(), area);
}
