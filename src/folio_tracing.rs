use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use folio::config::Config;

/// Logs to a daily rolling file and to the in-app logs tab
pub fn init(config: &Config) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(config.log_dir(), "folio.log");

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(file_appender);

    // Logs the file layer will capture
    let env_filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // The log level tui logger will capture
    let default_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let tui_layer = tui_logger::tracing_subscriber_layer();
    tui_logger::init_logger(default_level)?;

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(vec![tui_layer.boxed(), fmt_layer.boxed()])
        .try_init()?;

    Ok(())
}
