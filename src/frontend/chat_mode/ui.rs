use ratatui::prelude::*;
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Wrap,
};

use crate::frontend::floating_trigger::TRIGGER_HEIGHT;
use crate::frontend::App;

use super::message_formatting::format_chat_messages;

const WINDOW_WIDTH: u16 = 48;
const MIN_WINDOW_HEIGHT: u16 = 12;
const SEND_LABEL: &str = "[send]";

const HEADER: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Rgb(76, 29, 149))
    .add_modifier(Modifier::BOLD);
const CONTROL: Style = Style::new().fg(Color::Rgb(221, 214, 254)).bg(Color::Rgb(76, 29, 149));

/// Clickable controls, as last rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatControls {
    pub sound: Rect,
    pub clear: Rect,
    pub close: Rect,
    pub send: Rect,
}

/// Draws the chat window floating above the trigger in the bottom right of `area`
pub fn ui(f: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let window = window_area(area);
    f.render_widget(Clear, window);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(139, 92, 246)));
    let inner = block.inner(window);
    f.render_widget(block, window);

    let typing_height = u16::from(app.chat.is_typing());
    let [header_area, messages_area, typing_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(typing_height),
        Constraint::Length(3),
    ])
    .areas(inner);

    let [sound, clear, close] = render_header(f, app, header_area);
    render_messages(f, app, messages_area);

    if app.chat.is_typing() {
        let label = format!("{} is typing…", app.chat.assistant_name());
        let throbber = throbber_widgets_tui::Throbber::default()
            .label(label)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(throbber, typing_area);
    }

    let send = render_input(f, app, input_area);

    app.chat_controls = Some(ChatControls {
        sound,
        clear,
        close,
        send,
    });
}

/// Draws the input row with the send control to its right, returns the control's area
fn render_input(f: &mut ratatui::Frame, app: &mut App, area: Rect) -> Rect {
    #[allow(clippy::cast_possible_truncation)]
    let send_width = SEND_LABEL.len() as u16;
    let [text_area, send_area] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(send_width + 1),
    ])
    .areas(area);

    app.text_input.set_block(
        Block::default()
            .borders(Borders::TOP)
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(&app.text_input, text_area);

    let block = Block::default().borders(Borders::TOP);
    let send = Rect::new(send_area.x, send_area.y + 1, send_width, 1)
        .intersection(block.inner(send_area));
    f.render_widget(block, send_area);
    f.render_widget(Span::styled(SEND_LABEL, CONTROL), send);

    send
}

fn window_area(area: Rect) -> Rect {
    let width = WINDOW_WIDTH.min(area.width.saturating_sub(2));
    let height = u16::try_from(u32::from(area.height) * 7 / 10)
        .unwrap_or(u16::MAX)
        .max(MIN_WINDOW_HEIGHT)
        .min(area.height.saturating_sub(TRIGGER_HEIGHT));

    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + TRIGGER_HEIGHT),
        width,
        height,
    )
}

fn render_header(f: &mut ratatui::Frame, app: &App, area: Rect) -> [Rect; 3] {
    f.render_widget(Block::default().style(HEADER), area);

    let title = Line::from(format!(" 🤖 {}", app.chat.assistant_name())).style(HEADER);
    f.render_widget(title, area);

    let sound_label = if app.chat.sound_enabled() {
        "[sound]"
    } else {
        "[muted]"
    };
    let labels = [sound_label, "[clear]", "[close]"];

    // Right aligned, one space between and after the controls
    #[allow(clippy::cast_possible_truncation)]
    let widths = labels.map(|label| label.len() as u16);
    let total = widths.iter().sum::<u16>() + 3;
    let mut x = area.right().saturating_sub(total);

    let mut rects = [Rect::default(); 3];
    for (index, (label, width)) in labels.iter().zip(widths).enumerate() {
        let rect = Rect::new(x, area.y, width, 1).intersection(area);
        f.render_widget(Span::styled(*label, CONTROL), rect);
        rects[index] = rect;
        x += width + 1;
    }

    rects
}

fn render_messages(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let chat_content = format_chat_messages(app.chat.messages());

    let paragraph = Paragraph::new(chat_content).wrap(Wrap { trim: false });
    let num_lines = paragraph.line_count(area.width.saturating_sub(1));
    let max_scroll = u16::try_from(num_lines.saturating_sub(usize::from(area.height)))
        .unwrap_or(u16::MAX);

    // Follow the newest message unless scrolled back
    app.chat.scroll_back = app.chat.scroll_back.min(max_scroll);
    let scroll = max_scroll - app.chat.scroll_back;

    let text_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    f.render_widget(paragraph.scroll((scroll, 0)), text_area);

    let mut scroll_state = ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll));
    f.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None),
        area,
        &mut scroll_state,
    );
}
