use std::path::PathBuf;

use cardsift_config::Config;
use cardsift_core::{Query, apply_filter};
use tracing::info;

use super::{load_roster, render_cards};

/// Input parameters for the Filter command strategy.
#[derive(Debug, Clone)]
pub struct FilterInput {
    /// Search text, tokenized on whitespace.
    pub query: String,

    /// Roster override from the command line.
    pub cards: Option<PathBuf>,
}

/// Strategy for a one-shot filter pass.
///
/// Applies a single query to the roster and prints the matching cards, for
/// scripting and quick lookups.
#[derive(Debug, Clone, Copy)]
pub struct FilterStrategy;

impl super::CommandStrategy for FilterStrategy {
    type Input = FilterInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut cards = load_roster(&config, input.cards.as_deref())?;

        let query = Query::parse(&input.query);
        info!("one-shot query: \"{}\"", query.text());

        let report = apply_filter(&query, &mut cards);
        render_cards(&cards, &config.shell, report);

        Ok(())
    }
}
