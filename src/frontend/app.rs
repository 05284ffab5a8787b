use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use tui_logger::TuiWidgetState;
use tui_textarea::TextArea;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use tokio::sync::mpsc;
use tokio::task;

use crate::{
    catalog::ContentCatalog,
    chat::ChatWindow,
    config::Config,
    response_engine::ResponseEngine,
    scroll_tracker::ScrollTracker,
    sound::SoundFeedback,
};

use super::{chat_mode::ChatControls, logs_mode, page_mode, portfolio_page::PortfolioPage, UIEvent};

const TICK_RATE: u64 = 250;

/// Handles user and TUI interaction
pub struct App<'a> {
    /// The chat input row
    pub text_input: TextArea<'a>,

    /// The assistant's chat window
    pub chat: ChatWindow,

    /// The page the assistant floats over
    pub page: PortfolioPage,

    /// Drives the trigger's visibility and progress ring
    pub scroll_tracker: ScrollTracker,

    /// Holds the sender of UI events for later cloning if needed
    pub ui_tx: mpsc::UnboundedSender<UIEvent>,

    /// Receives UI events (key presses, timers, etc)
    pub ui_rx: mpsc::UnboundedReceiver<UIEvent>,

    /// Mode the app is in, manages the which layout is rendered and if it should quit
    pub mode: AppMode,

    /// Tab names
    pub tab_names: Vec<&'static str>,

    /// States when viewing logs
    pub log_state: TuiWidgetState,

    /// Where the trigger was last drawn, `None` while hidden
    pub trigger_area: Option<Rect>,

    /// Clickable controls of the chat window as last drawn, `None` while closed
    pub chat_controls: Option<ChatControls>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AppMode {
    #[default]
    Portfolio,
    Logs,
    Quit,
}

impl AppMode {
    fn on_key(self, app: &mut App, key: KeyEvent) {
        match self {
            AppMode::Portfolio => page_mode::on_key(app, key),
            AppMode::Logs => logs_mode::on_key(app, key),
            AppMode::Quit => (),
        }
    }

    fn on_mouse(self, app: &mut App, mouse: MouseEvent) {
        match self {
            AppMode::Portfolio => page_mode::on_mouse(app, mouse),
            AppMode::Logs | AppMode::Quit => (),
        }
    }

    fn ui(self, f: &mut ratatui::Frame, area: Rect, app: &mut App) {
        match self {
            AppMode::Portfolio => page_mode::ui(f, area, app),
            AppMode::Logs => logs_mode::ui(f, area, app),
            AppMode::Quit => (),
        }
    }

    fn tab_index(self) -> Option<usize> {
        match self {
            AppMode::Portfolio => Some(0),
            AppMode::Logs => Some(1),
            AppMode::Quit => None,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(AppMode::Portfolio),
            1 => Some(AppMode::Logs),
            _ => None,
        }
    }
}

fn new_text_area() -> TextArea<'static> {
    let mut text_area = TextArea::default();

    text_area.set_placeholder_text("Ask something...");
    text_area.set_placeholder_style(Style::default().fg(Color::Gray));
    text_area.set_cursor_line_style(Style::reset());

    text_area
}

impl App<'_> {
    pub fn new(config: &Config, catalog: Arc<ContentCatalog>, sound: SoundFeedback) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        let page = PortfolioPage::from_catalog(&catalog);
        let chat = ChatWindow::new(
            config.assistant_name.clone(),
            ResponseEngine::new(catalog),
            sound,
            ui_tx.clone(),
        )
        .with_sound_enabled(config.sound.enabled);

        Self {
            text_input: new_text_area(),
            chat,
            page,
            scroll_tracker: ScrollTracker::new(ui_tx.clone()),
            ui_tx,
            ui_rx,
            mode: AppMode::default(),
            tab_names: vec!["[F1] Portfolio", "[F2] Logs"],
            log_state: TuiWidgetState::new()
                .set_default_display_level(log::LevelFilter::Off)
                .set_level_for_target("folio", log::LevelFilter::Info),
            trigger_area: None,
            chat_controls: None,
        }
    }

    pub fn send_ui_event(&self, msg: impl Into<UIEvent>) {
        let event = msg.into();
        tracing::debug!("Sending ui event {event}");
        if let Err(err) = self.ui_tx.send(event) {
            tracing::error!("Failed to send ui event {err}");
        }
    }

    pub fn reset_text_input(&mut self) {
        self.text_input = new_text_area();
    }

    /// Scrolls the page and reports the scroll to the tracker if the position changed
    pub fn scroll_page(&mut self, delta: isize) {
        if let Some(metrics) = self.page.scroll_by(delta) {
            self.scroll_tracker.on_scroll(metrics);
        }
    }

    /// Records the page's rendered height
    ///
    /// A resize that moves the scroll position counts as a scroll.
    pub fn resize_page(&mut self, viewport_height: usize) {
        if let Some(metrics) = self.page.set_viewport_height(viewport_height) {
            self.scroll_tracker.on_scroll(metrics);
        }
    }

    fn change_mode(&mut self, mode: AppMode) {
        if mode.tab_index().is_some() {
            tracing::debug!("Changing mode to {mode:?}");
            self.mode = mode;
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Always quit on ctrl q
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('q') {
            tracing::warn!("Ctrl-Q pressed, quitting");
            return self.send_ui_event(UIEvent::Quit);
        }

        if let KeyCode::F(index) = key.code {
            let index = index.saturating_sub(1);
            if let Some(mode) = AppMode::from_index(index as usize) {
                return self.send_ui_event(UIEvent::ChangeMode(mode));
            }
        }

        self.mode.on_key(self, key);
    }

    pub fn handle_event(&mut self, event: UIEvent) {
        if !matches!(event, UIEvent::Tick | UIEvent::Input(_) | UIEvent::Mouse(_)) {
            tracing::debug!("Received ui event: {event}");
        }

        match event {
            UIEvent::Input(key) => self.on_key(key),
            UIEvent::Mouse(mouse) => self.mode.on_mouse(self, mouse),
            UIEvent::Tick => (),
            UIEvent::RevealTrigger(generation) => {
                self.scroll_tracker.reveal(generation);
            }
            UIEvent::BotReply(reply) => self.chat.complete_reply(&reply),
            UIEvent::OpenChat => self.chat.open(),
            UIEvent::CloseChat => self.chat.close(),
            UIEvent::ClearHistory => self.chat.clear_history(),
            UIEvent::ToggleSound => self.chat.toggle_sound(),
            UIEvent::ChangeMode(mode) => self.change_mode(mode),
            UIEvent::Quit => {
                tracing::warn!("UI received quit event, quitting");
                self.mode = AppMode::Quit;
            }
        }
    }

    /// Handles every event that is already queued, without waiting
    pub fn handle_pending_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Waits for and handles events until one matches `predicate`, inclusive
    pub async fn handle_events_until(&mut self, predicate: impl Fn(&UIEvent) -> bool) {
        while let Some(event) = self.ui_rx.recv().await {
            let done = predicate(&event);
            self.handle_event(event);
            if done {
                break;
            }
        }
    }

    pub fn draw(&mut self, f: &mut ratatui::Frame) {
        let base_area = self.draw_base_ui(f);
        self.mode.ui(f, base_area, self);
    }

    #[tracing::instrument(skip_all)]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let ui_tx = self.ui_tx.clone();
        let handle = task::spawn_blocking(move || poll_ui_events(&ui_tx));

        loop {
            // Draw the UI
            terminal.draw(|f| self.draw(f))?;

            if self.mode == AppMode::Quit {
                break;
            }

            // Handle events
            if let Some(event) = self.ui_rx.recv().await {
                self.handle_event(event);
            }
        }

        // The poller stops on its own once the receiver is gone
        drop(handle);

        Ok(())
    }

    fn draw_base_ui(&self, f: &mut ratatui::Frame) -> Rect {
        let [top_area, main_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(f.area());

        let tabs = Tabs::new(self.tab_names.iter().copied())
            .block(Block::default().borders(Borders::BOTTOM))
            .highlight_style(Style::default().fg(Color::Yellow).bold())
            .select(self.mode.tab_index().unwrap_or(0))
            .divider("|");

        f.render_widget(tabs, top_area);

        main_area
    }
}

fn poll_ui_events(ui_tx: &mpsc::UnboundedSender<UIEvent>) -> Result<()> {
    loop {
        // Poll for events
        if event::poll(Duration::from_millis(TICK_RATE))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ui_tx.send(UIEvent::Input(key))?;
                }
                Event::Mouse(mouse) => ui_tx.send(UIEvent::Mouse(mouse))?,
                _ => (),
            }
        }

        ui_tx.send(UIEvent::Tick)?;
    }
}
