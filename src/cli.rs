use std::path::PathBuf;

use clap::Parser;

use folio::config::defaults::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug, Clone)]
#[clap(author, about, version)]
pub struct Args {
    /// Optional path to overwrite the config
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,

    /// Read the portfolio content from this file instead of the built-in catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Run folio as a tui (default) or answer a single question
    #[arg(short, long, default_value = "tui")]
    pub mode: ModeArgs,

    /// When asking directly, the question to answer
    #[arg(short, long, required_if_eq("mode", "ask"))]
    pub query: Option<String>,

    /// Start with sound cues turned off
    #[arg(long, default_value_t = false)]
    pub mute: bool,

    /// Print the configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum ModeArgs {
    Ask,
    #[default]
    Tui,
}
