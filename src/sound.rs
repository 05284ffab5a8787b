//! Audible feedback when messages are sent and received
use std::io::Write as _;

use anyhow::Result;

use crate::config::{SoundConfiguration, SoundPlayer};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIs,
)]
#[strum(serialize_all = "snake_case")]
pub enum CueKind {
    Send,
    Receive,
}

/// A short, fixed clip identified by its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub kind: CueKind,
    pub source: String,
}

/// Plays cues
///
/// Implementations restart the cue from the beginning on every call.
#[cfg_attr(test, mockall::automock)]
pub trait CuePlayer {
    fn restart(&mut self, cue: &Cue) -> Result<()>;
}

/// Rings the terminal bell for every cue
#[derive(Debug, Default)]
pub struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn restart(&mut self, cue: &Cue) -> Result<()> {
        tracing::trace!(cue = %cue.kind, source = %cue.source, "Ringing bell");
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Never makes a sound
#[derive(Debug, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn restart(&mut self, _cue: &Cue) -> Result<()> {
        Ok(())
    }
}

pub struct SoundFeedback {
    player: Box<dyn CuePlayer>,
    send: Cue,
    receive: Cue,
}

impl std::fmt::Debug for SoundFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundFeedback")
            .field("send", &self.send)
            .field("receive", &self.receive)
            .finish_non_exhaustive()
    }
}

impl SoundFeedback {
    pub fn new(
        player: impl CuePlayer + 'static,
        send_source: impl Into<String>,
        receive_source: impl Into<String>,
    ) -> Self {
        Self {
            player: Box::new(player),
            send: Cue {
                kind: CueKind::Send,
                source: send_source.into(),
            },
            receive: Cue {
                kind: CueKind::Receive,
                source: receive_source.into(),
            },
        }
    }

    pub fn from_config(config: &SoundConfiguration) -> Self {
        match config.player {
            SoundPlayer::Bell => Self::new(TerminalBell, &config.send_cue, &config.receive_cue),
            SoundPlayer::Silent => Self::new(Silent, &config.send_cue, &config.receive_cue),
        }
    }

    pub fn silent() -> Self {
        Self::new(Silent, "", "")
    }

    pub fn cue(&self, kind: CueKind) -> &Cue {
        match kind {
            CueKind::Send => &self.send,
            CueKind::Receive => &self.receive,
        }
    }

    /// Plays the cue of `kind` if `enabled`
    ///
    /// Playback failures (i.e. a terminal that refuses output) are logged and dropped.
    pub fn play(&mut self, kind: CueKind, enabled: bool) {
        if !enabled {
            return;
        }

        let cue = match kind {
            CueKind::Send => &self.send,
            CueKind::Receive => &self.receive,
        };

        if let Err(error) = self.player.restart(cue) {
            tracing::debug!(?error, cue = %kind, "Cue playback failed");
        }
    }
}
