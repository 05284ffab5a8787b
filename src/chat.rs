//! The assistant's chat window
//!
//! Owns the conversation and drives the response engine and sound cues. Replies are deferred
//! by [`REPLY_DELAY`] and posted back into the ui event loop, where [`ChatWindow::complete_reply`]
//! commits them.
use std::time::Duration;

use tokio::sync::mpsc;

use crate::{
    chat_message::{ChatMessage, MessageId},
    frontend::UIEvent,
    response_engine::{self, ResponseEngine},
    sound::{CueKind, SoundFeedback},
};

/// Delay before the bot answers a message
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIs)]
#[strum(serialize_all = "kebab-case")]
pub enum ChatWindowState {
    Closed,
    OpenIdle,
    OpenAwaitingReply,
}

/// A reply that is due, carrying the original user text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub query: String,
}

#[derive(Debug)]
pub struct ChatWindow {
    assistant_name: String,
    messages: Vec<ChatMessage>,
    is_open: bool,
    is_typing: bool,
    sound_enabled: bool,
    input_value: String,
    last_id: u64,

    /// Rows scrolled back from the newest message
    pub scroll_back: u16,

    engine: ResponseEngine,
    sound: SoundFeedback,
    ui_tx: mpsc::UnboundedSender<UIEvent>,
}

impl ChatWindow {
    /// A closed window, seeded with the welcome message
    pub fn new(
        assistant_name: impl Into<String>,
        engine: ResponseEngine,
        sound: SoundFeedback,
        ui_tx: mpsc::UnboundedSender<UIEvent>,
    ) -> Self {
        let mut window = Self {
            assistant_name: assistant_name.into(),
            messages: Vec::new(),
            is_open: false,
            is_typing: false,
            sound_enabled: true,
            input_value: String::new(),
            last_id: 0,
            scroll_back: 0,
            engine,
            sound,
            ui_tx,
        };

        let welcome = response_engine::welcome(&window.assistant_name);
        window.push(ChatMessage::new_bot(welcome));
        window
    }

    #[must_use]
    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn state(&self) -> ChatWindowState {
        match (self.is_open, self.is_typing) {
            (false, _) => ChatWindowState::Closed,
            (true, false) => ChatWindowState::OpenIdle,
            (true, true) => ChatWindowState::OpenAwaitingReply,
        }
    }

    pub fn open(&mut self) {
        tracing::debug!("Opening chat window");
        self.is_open = true;
        self.follow_tail();
    }

    pub fn close(&mut self) {
        tracing::debug!("Closing chat window");
        self.is_open = false;
        self.follow_tail();
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        tracing::debug!(sound_enabled = self.sound_enabled, "Toggled sound");
    }

    /// Removes every message, including the welcome message
    pub fn clear_history(&mut self) {
        tracing::debug!(count = self.messages.len(), "Clearing chat history");
        self.messages.clear();
        self.follow_tail();
    }

    /// Mirrors the input row
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
    }

    /// Sends whatever is in the input row
    pub fn submit(&mut self) -> bool {
        let text = self.input_value.clone();
        self.send_message(&text)
    }

    /// Appends a user message and schedules the bot's reply
    ///
    /// Blank text, or sending while the window is closed, is ignored and leaves the input as
    /// is. Returns whether the message was accepted.
    #[tracing::instrument(skip(self))]
    pub fn send_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        if !self.is_open {
            tracing::warn!("Ignoring message sent to a closed chat window");
            return false;
        }

        self.sound.play(CueKind::Send, self.sound_enabled);

        self.push(ChatMessage::new_user(text));
        self.input_value.clear();
        self.is_typing = true;

        let reply = PendingReply {
            query: text.to_string(),
        };
        let ui_tx = self.ui_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(REPLY_DELAY).await;
            if let Err(err) = ui_tx.send(UIEvent::BotReply(reply)) {
                tracing::error!("Failed to send bot reply {err}");
            }
        });

        true
    }

    /// Commits a deferred reply
    ///
    /// Applies regardless of whether the window was closed or cleared in the meantime. The
    /// receive cue honours the sound setting at this moment, not at send time.
    #[tracing::instrument(skip(self))]
    pub fn complete_reply(&mut self, reply: &PendingReply) {
        let content = self.engine.respond(&reply.query);

        self.push(ChatMessage::new_bot(content));
        self.is_typing = false;

        self.sound.play(CueKind::Receive, self.sound_enabled);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(2);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(2);
    }

    fn push(&mut self, mut builder: crate::chat_message::ChatMessageBuilder) {
        self.last_id += 1;
        let message = builder.id(MessageId(self.last_id)).build();
        self.messages.push(message);
        self.follow_tail();
    }

    fn follow_tail(&mut self) {
        self.scroll_back = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::ContentCatalog;
    use crate::chat_message::Sender;
    use crate::sound::MockCuePlayer;

    fn window_with(sound: SoundFeedback) -> (ChatWindow, mpsc::UnboundedReceiver<UIEvent>) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let engine = ResponseEngine::new(Arc::new(ContentCatalog::embedded().unwrap()));

        (ChatWindow::new("Patra AI", engine, sound, ui_tx), ui_rx)
    }

    fn window() -> (ChatWindow, mpsc::UnboundedReceiver<UIEvent>) {
        window_with(SoundFeedback::silent())
    }

    async fn next_reply(ui_rx: &mut mpsc::UnboundedReceiver<UIEvent>) -> PendingReply {
        match ui_rx.recv().await {
            Some(UIEvent::BotReply(reply)) => reply,
            other => panic!("Expected a bot reply, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_closed_with_welcome() {
        let (window, _rx) = window();

        assert_eq!(window.state(), ChatWindowState::Closed);
        assert_eq!(window.messages().len(), 1);
        assert_eq!(window.messages()[0].sender(), Sender::Bot);
        assert!(window.sound_enabled());
        assert!(!window.is_typing());
    }

    #[test]
    fn test_open_and_close() {
        let (mut window, _rx) = window();

        window.open();
        assert_eq!(window.state(), ChatWindowState::OpenIdle);

        window.close();
        assert_eq!(window.state(), ChatWindowState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_ignored() {
        let (mut window, mut ui_rx) = window();
        window.open();

        for blank in ["", "   ", "\n\t "] {
            window.set_input(blank);
            assert!(!window.submit());
            assert_eq!(window.input_value(), blank);
        }

        assert_eq!(window.messages().len(), 1);
        assert_eq!(window.state(), ChatWindowState::OpenIdle);
        assert!(
            tokio::time::timeout(REPLY_DELAY * 2, ui_rx.recv())
                .await
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_closed_is_ignored() {
        let (mut window, _rx) = window();

        window.set_input("projects");
        assert!(!window.submit());
        assert_eq!(window.input_value(), "projects");
        assert_eq!(window.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_and_reply_cycle() {
        let (mut window, mut ui_rx) = window();
        window.open();

        window.set_input("  skills please ");
        assert!(window.submit());

        assert_eq!(window.input_value(), "");
        assert!(window.is_typing());
        assert_eq!(window.state(), ChatWindowState::OpenAwaitingReply);

        let user_message = &window.messages()[1];
        assert_eq!(user_message.sender(), Sender::User);
        assert_eq!(user_message.content().to_plain_text(), "  skills please ");

        let started = tokio::time::Instant::now();
        let reply = next_reply(&mut ui_rx).await;
        assert!(started.elapsed() >= REPLY_DELAY);
        assert_eq!(reply.query, "  skills please ");

        window.complete_reply(&reply);

        let bot_message = window.messages().last().unwrap();
        assert_eq!(bot_message.sender(), Sender::Bot);
        assert_eq!(
            bot_message.content(),
            &window.engine.respond("skills please")
        );
        assert!(!window.is_typing());
        assert_eq!(window.state(), ChatWindowState::OpenIdle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_ids_are_unique_and_increasing() {
        let (mut window, mut ui_rx) = window();
        window.open();

        window.send_message("hi");
        window.send_message("projects");
        for _ in 0..2 {
            let reply = next_reply(&mut ui_rx).await;
            window.complete_reply(&reply);
        }
        window.clear_history();
        window.send_message("again");

        let ids = window
            .messages()
            .iter()
            .map(ChatMessage::id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![MessageId(6)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sends_while_typing_queue_their_own_reply() {
        let (mut window, mut ui_rx) = window();
        window.open();

        assert!(window.send_message("hello"));
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(window.send_message("xyz"));

        let first = next_reply(&mut ui_rx).await;
        let second = next_reply(&mut ui_rx).await;
        assert_eq!(first.query, "hello");
        assert_eq!(second.query, "xyz");

        window.complete_reply(&first);
        window.complete_reply(&second);

        let bot_texts = window
            .messages()
            .iter()
            .skip(1)
            .filter(|m| m.sender().is_bot())
            .map(|m| m.content().clone())
            .collect::<Vec<_>>();
        assert_eq!(
            bot_texts,
            vec![response_engine::greeting(), response_engine::fallback()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_history() {
        let (mut window, mut ui_rx) = window();
        window.open();
        window.send_message("projects");

        window.clear_history();
        assert!(window.messages().is_empty());
        assert!(window.is_open());
        assert!(window.is_typing());

        // The pending reply still lands after a clear
        let reply = next_reply(&mut ui_rx).await;
        window.complete_reply(&reply);
        assert_eq!(window.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_after_close() {
        let (mut window, mut ui_rx) = window();
        window.open();
        window.send_message("education");
        window.close();

        let reply = next_reply(&mut ui_rx).await;
        window.complete_reply(&reply);

        assert_eq!(window.state(), ChatWindowState::Closed);
        assert_eq!(window.messages().len(), 3);
        assert!(!window.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sound_cues_during_cycle() {
        let mut player = MockCuePlayer::new();
        let mut sequence = mockall::Sequence::new();
        player
            .expect_restart()
            .withf(|cue| cue.kind.is_send())
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));
        player
            .expect_restart()
            .withf(|cue| cue.kind.is_receive())
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        let (mut window, mut ui_rx) = window_with(SoundFeedback::new(player, "send", "receive"));
        window.open();
        window.send_message("skills please");

        let reply = next_reply(&mut ui_rx).await;
        window.complete_reply(&reply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sound_disabled_plays_no_cues() {
        let mut player = MockCuePlayer::new();
        player.expect_restart().never();

        let (window, mut ui_rx) = window_with(SoundFeedback::new(player, "send", "receive"));
        let mut window = window.with_sound_enabled(false);
        window.open();
        window.send_message("hello");

        let reply = next_reply(&mut ui_rx).await;
        window.complete_reply(&reply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_between_send_and_reply_only_affects_receive() {
        let mut player = MockCuePlayer::new();
        player
            .expect_restart()
            .withf(|cue| cue.kind.is_send())
            .times(1)
            .returning(|_| Ok(()));
        player
            .expect_restart()
            .withf(|cue| cue.kind.is_receive())
            .never();

        let (mut window, mut ui_rx) = window_with(SoundFeedback::new(player, "send", "receive"));
        window.open();
        window.send_message("hello");
        window.toggle_sound();
        assert!(!window.sound_enabled());

        let reply = next_reply(&mut ui_rx).await;
        window.complete_reply(&reply);
    }

    #[test]
    fn test_scroll_back_resets_on_new_content() {
        let (mut window, _rx) = window();

        window.scroll_up();
        window.scroll_up();
        assert_eq!(window.scroll_back, 4);
        window.scroll_down();
        assert_eq!(window.scroll_back, 2);

        window.open();
        assert_eq!(window.scroll_back, 0);
    }
}
