mod cli;
mod clock;
mod commands;
mod input;
mod render;
mod settings;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("matchcards=info".parse()?)
                .add_directive("matchcards_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = settings::load_config(args.config.as_deref());
    if let Some(path) = args.score_file {
        info!("Using score file {}", path.display());
        config.score_file = path;
    }
    let colored = !args.no_color && io::stdout().is_terminal();

    match args.command {
        Command::Play {
            mode,
            difficulty,
            players,
            seed,
        } => commands::play::run(&config, mode, difficulty, players, seed, colored),
        Command::Scores {
            mode,
            format,
            highlight,
            time,
        } => {
            let highlight = highlight.as_deref().zip(time);
            commands::scores::run(&config, mode, format, highlight, colored)
        }
    }
}
