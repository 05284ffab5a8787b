//! Derives the floating trigger's visibility and progress ring from page scrolling
use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::frontend::UIEvent;

/// Quiet period after the last scroll before the trigger shows again
pub const REVEAL_DELAY: Duration = Duration::from_millis(700);

/// Extents of the scroll surface, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable distance covered, always within 0..=100
    pub fn progress(&self) -> f64 {
        let scrollable = self.content_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }

        (self.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            visible: true,
        }
    }
}

/// Hides the trigger while the page scrolls and reveals it after [`REVEAL_DELAY`] of quiet
///
/// At most one reveal timer is outstanding; every scroll replaces it. Dropping the tracker
/// cancels the pending timer.
#[derive(Debug)]
pub struct ScrollTracker {
    state: ScrollState,
    generation: u64,
    reveal_task: Option<JoinHandle<()>>,
    ui_tx: mpsc::UnboundedSender<UIEvent>,
}

impl ScrollTracker {
    pub fn new(ui_tx: mpsc::UnboundedSender<UIEvent>) -> Self {
        Self {
            state: ScrollState::default(),
            generation: 0,
            reveal_task: None,
            ui_tx,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.state.visible = false;

        if let Some(task) = self.reveal_task.take() {
            task.abort();
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let ui_tx = self.ui_tx.clone();

        self.reveal_task = Some(tokio::spawn(async move {
            tokio::time::sleep(REVEAL_DELAY).await;
            if let Err(err) = ui_tx.send(UIEvent::RevealTrigger(generation)) {
                tracing::debug!("Failed to send reveal event {err}");
            }
        }));

        self.state.progress = metrics.progress();
    }

    /// Applies a fired reveal timer
    ///
    /// Returns false if the timer was superseded by a later scroll.
    pub fn reveal(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "Ignoring stale reveal");
            return false;
        }

        self.reveal_task = None;
        self.state.visible = true;
        true
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        if let Some(task) = self.reveal_task.take() {
            task.abort();
        }
    }
}
