use derive_builder::Builder;

use crate::rich_text::RichText;

/// Session unique, monotonically increasing message id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Represents a message that can be stored in a [`crate::chat::ChatWindow`]
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into), build_fn(skip))]
pub struct ChatMessage {
    id: MessageId,
    content: RichText,
    sender: Sender,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIs,
)]
#[strum(serialize_all = "snake_case")]
pub enum Sender {
    User,
    #[default]
    Bot,
}

impl ChatMessage {
    pub fn new_user(msg: impl Into<RichText>) -> ChatMessageBuilder {
        ChatMessageBuilder::default()
            .sender(Sender::User)
            .content(msg.into())
            .to_owned()
    }

    pub fn new_bot(content: impl Into<RichText>) -> ChatMessageBuilder {
        ChatMessageBuilder::default()
            .sender(Sender::Bot)
            .content(content.into())
            .to_owned()
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &RichText {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

impl ChatMessageBuilder {
    // Building is infallible
    pub fn build(&mut self) -> ChatMessage {
        ChatMessage {
            id: self.id.unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            sender: self.sender.unwrap_or_default(),
        }
    }
}
