use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

pub const SEND_CUE: &str = "https://codeskulptor-demos.commondatastorage.googleapis.com/pang/pop.mp3";
pub const RECEIVE_CUE: &str =
    "https://codeskulptor-demos.commondatastorage.googleapis.com/GalaxyInvaders/pause.wav";

#[must_use]
pub fn default_assistant_name() -> String {
    "Patra AI".to_string()
}

pub(super) fn default_log_dir() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    path.push("folio");
    path.push("logs");

    path
}

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_send_cue() -> String {
    SEND_CUE.to_string()
}

pub(super) fn default_receive_cue() -> String {
    RECEIVE_CUE.to_string()
}
