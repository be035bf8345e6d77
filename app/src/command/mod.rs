//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input, wired up
//! with static dispatch. Adding a command means adding one file and one
//! `CommandStrategy` impl.

use cardsift_config::{Config, ShellConfig};
use cardsift_core::{Card, FilterReport, load_cards};
use std::path::Path;
use tracing::{info, warn};

mod filter;
mod init;
mod shell;
mod version;

pub use filter::{FilterInput, FilterStrategy};
pub use init::InitStrategy;
pub use shell::{ShellInput, ShellStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, enabling
/// type-safe parameter passing without runtime casting or boxing. All calls
/// are monomorphized at compile time.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Resolve the roster location and load the card collection.
///
/// A command-line override wins over the configured path.
fn load_roster(config: &Config, override_path: Option<&Path>) -> anyhow::Result<Vec<Card>> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => config.roster_path()?,
    };

    let cards = load_cards(&path)
        .map_err(|e| anyhow::anyhow!("cannot load roster {}: {e}", path.display()))?;

    if cards.is_empty() {
        warn!("roster {} contains no cards", path.display());
    } else {
        info!("directory holds {} cards", cards.len());
    }

    Ok(cards)
}

/// Print the visible cards; hidden cards are omitted entirely.
fn render_cards(cards: &[Card], shell: &ShellConfig, report: FilterReport) {
    for card in cards.iter().filter(|card| card.is_visible()) {
        println!("• {} ({})", card.name, card.location);
        if let Some(description) = &card.description {
            println!("    {description}");
        }
    }

    if report.visible == 0 {
        println!("(no cards match)");
    }
    if shell.show_counts {
        println!("{} of {} cards", report.visible, report.total());
    }
}
