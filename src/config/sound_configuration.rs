use serde::{Deserialize, Serialize};

use super::defaults::{default_receive_cue, default_send_cue, default_true};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SoundConfiguration {
    /// Whether cues play when the app starts, can be toggled at runtime
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub player: SoundPlayer,
    #[serde(default = "default_send_cue")]
    pub send_cue: String,
    #[serde(default = "default_receive_cue")]
    pub receive_cue: String,
}

impl Default for SoundConfiguration {
    fn default() -> Self {
        Self {
            enabled: true,
            player: SoundPlayer::default(),
            send_cue: default_send_cue(),
            receive_cue: default_receive_cue(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundPlayer {
    /// Terminal bell
    #[default]
    Bell,
    Silent,
}
