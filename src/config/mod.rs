#[allow(clippy::module_inception)]
mod config;
pub mod defaults;
mod sound_configuration;

pub use config::*;
pub use sound_configuration::*;
