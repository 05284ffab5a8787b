use ratatui::prelude::*;

use crate::{
    chat_message::{ChatMessage, Sender},
    rich_text::{Fragment, RichText},
};

pub(crate) mod message_styles {
    use super::{Color, Modifier, Style};

    pub const USER: Style = Style::new().fg(Color::Cyan);

    pub const BOT: Style = Style::new().fg(Color::Rgb(200, 160, 255));

    pub const EMPHASIS: Modifier = Modifier::BOLD;
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn get_style_and_prefix(sender: &Sender) -> (&'static str, Style, Alignment) {
    match sender {
        Sender::User => ("", message_styles::USER, Alignment::Right),
        Sender::Bot => ("✦ ", message_styles::BOT, Alignment::Left),
    }
}

/// Renders a message as lines aligned to the sender's side
pub fn format_chat_message(message: &ChatMessage) -> Text<'static> {
    let (prefix, style, alignment) = get_style_and_prefix(&message.sender());

    let mut rendered_text = render_rich_text(message.content(), style);

    // Prepend the styled prefix to the first line
    if !prefix.is_empty() {
        if let Some(first_line) = rendered_text.lines.first_mut() {
            first_line.spans.insert(0, Span::styled(prefix, style));
        }
    }

    rendered_text
        .lines
        .iter_mut()
        .for_each(|line| line.alignment = Some(alignment));

    rendered_text
}

/// Maps fragments to styled spans, emphasis is bold
pub fn render_rich_text(content: &RichText, style: Style) -> Text<'static> {
    content
        .lines()
        .into_iter()
        .map(|fragments| {
            fragments
                .into_iter()
                .filter_map(|fragment| match fragment {
                    Fragment::Plain(text) => Some(Span::styled(text.clone(), style)),
                    Fragment::Emphasis(text) => Some(Span::styled(
                        text.clone(),
                        style.add_modifier(message_styles::EMPHASIS),
                    )),
                    Fragment::LineBreak => None,
                })
                .collect::<Line>()
        })
        .collect()
}

/// All messages with a blank line between them
pub fn format_chat_messages(messages: &[ChatMessage]) -> Text<'static> {
    let mut text = Text::default();
    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            text.lines.push(Line::default());
        }
        text.lines.extend(format_chat_message(message).lines);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::MessageId;

    #[test]
    fn test_get_style_and_prefix() {
        assert_eq!(
            get_style_and_prefix(&Sender::User),
            ("", message_styles::USER, Alignment::Right)
        );
        assert_eq!(
            get_style_and_prefix(&Sender::Bot),
            ("✦ ", message_styles::BOT, Alignment::Left)
        );
    }

    #[test]
    fn test_format_user_message() {
        let message = ChatMessage::new_user("Hello, <b>world</b>!")
            .id(MessageId(1))
            .build();

        let formatted = format_chat_message(&message);

        assert_eq!(formatted.lines.len(), 1);
        assert_eq!(formatted.lines[0].alignment, Some(Alignment::Right));
        assert_eq!(
            formatted.lines[0].spans,
            vec![Span::styled("Hello, <b>world</b>!", message_styles::USER)]
        );
    }

    #[test]
    fn test_format_bot_message_with_emphasis() {
        let content = RichText::new()
            .plain("Try ")
            .emphasis("Projects")
            .line_break()
            .plain("next");
        let message = ChatMessage::new_bot(content).build();

        let formatted = format_chat_message(&message);

        assert_eq!(formatted.lines.len(), 2);
        assert_eq!(
            formatted.lines[0].spans,
            vec![
                Span::styled("✦ ", message_styles::BOT),
                Span::styled("Try ", message_styles::BOT),
                Span::styled("Projects", message_styles::BOT.add_modifier(Modifier::BOLD)),
            ]
        );
        assert_eq!(formatted.lines[1].alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_blank_line_between_messages() {
        let messages = vec![
            ChatMessage::new_bot("one").build(),
            ChatMessage::new_user("two").build(),
        ];

        let formatted = format_chat_messages(&messages);
        assert_eq!(formatted.lines.len(), 3);
        assert!(formatted.lines[1].spans.is_empty());
    }
}
