//! Interactive search shell.
//!
//! Each line read from stdin is one input event: the line is the search
//! box's current text. Events are serialized: the filter pass for a line
//! runs to completion before the next line is read.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use cardsift_config::Config;
use cardsift_core::{Query, apply_filter};
use tracing::info;

use super::{load_roster, render_cards};

/// Input parameters for the Shell command strategy.
#[derive(Debug, Clone)]
pub struct ShellInput {
    /// Roster override from the command line.
    pub cards: Option<PathBuf>,
}

/// Strategy for the interactive search shell.
///
/// Loads the roster once, shows the full directory, then re-filters and
/// re-renders on every submitted line. A blank line clears the filter;
/// Ctrl-D ends the session.
#[derive(Debug, Clone, Copy)]
pub struct ShellStrategy;

impl super::CommandStrategy for ShellStrategy {
    type Input = ShellInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut cards = load_roster(&config, input.cards.as_deref())?;

        println!("cardsift shell: type to filter, blank line shows all, Ctrl-D exits");
        let report = apply_filter(&Query::default(), &mut cards);
        render_cards(&cards, &config.shell, report);

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let mut line = String::new();

        loop {
            write!(stdout, "{}", config.shell.prompt)?;
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF ends the session.
                println!();
                break;
            }

            let query = Query::parse(&line);
            let report = apply_filter(&query, &mut cards);
            render_cards(&cards, &config.shell, report);
        }

        info!("shell session ended");
        Ok(())
    }
}
