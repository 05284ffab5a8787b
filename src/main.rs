use std::io::{self, stdout};
use std::panic::{set_hook, take_hook};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use ::tracing::instrument;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use folio::{
    catalog::ContentCatalog, config::Config, frontend::App, response_engine::ResponseEngine,
    sound::SoundFeedback,
};

mod cli;
mod folio_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let mut config = Config::load(&args.config_path).await?;
    if args.mute {
        config.sound.enabled = false;
    }
    if let Some(catalog) = &args.catalog {
        config.catalog_path = Some(catalog.clone());
    }

    if args.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let catalog = match &config.catalog_path {
        Some(path) => ContentCatalog::load(path).await?,
        None => ContentCatalog::embedded()?,
    };
    let catalog = Arc::new(catalog);

    match args.mode {
        cli::ModeArgs::Ask => {
            let query = args.query.as_deref().context("Expected a query")?;
            let engine = ResponseEngine::new(catalog);
            println!("{}", engine.respond(query).to_plain_text());
            Ok(())
        }
        cli::ModeArgs::Tui => {
            folio_tracing::init(&config)?;
            start_tui(&config, catalog).await
        }
    }
}

#[instrument(skip_all)]
async fn start_tui(config: &Config, catalog: Arc<ContentCatalog>) -> Result<()> {
    ::tracing::info!("Loaded configuration: {config:?}");

    // Setup terminal
    let mut terminal = init_tui()?;

    // Start the application
    let mut app = App::new(config, catalog, SoundFeedback::from_config(&config.sound));
    let app_result = app.run(&mut terminal).await;

    // Restore terminal
    restore_tui()?;
    terminal.show_cursor()?;

    if let Err(error) = app_result {
        ::tracing::error!(?error, "Application error");
        eprintln!("{error:#}");
        std::process::exit(1);
    }

    ::tracing::info!("Application completed without errors");

    Ok(())
}

pub fn init_tui() -> io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    init_panic_hook();
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn init_panic_hook() {
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        // intentionally ignore errors here since we're already in a panic
        let _ = restore_tui();
        original_hook(panic_info);
    }));
}

pub fn restore_tui() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
