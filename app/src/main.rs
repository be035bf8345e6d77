#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, FilterInput, FilterStrategy, InitStrategy, ShellInput, ShellStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "cardsift")]
#[command(about = "Search filter for a restaurant card directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the directory interactively, one query per line
    Shell {
        /// Roster file to load instead of the configured one
        #[arg(short, long)]
        cards: Option<PathBuf>,
    },
    /// Apply a single query and print the matching cards
    Filter {
        /// Search text, whitespace-separated tokens
        #[arg(short, long)]
        query: String,

        /// Roster file to load instead of the configured one
        #[arg(short, long)]
        cards: Option<PathBuf>,
    },
    /// Initialize configuration and a sample roster
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Shell { cards } => ShellStrategy.execute(ShellInput { cards }),
        Commands::Filter { query, cards } => FilterStrategy.execute(FilterInput { query, cards }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
