//! Roster loading.
//!
//! The card collection is supplied externally at startup as a JSON array of
//! records; this module turns that file into live cards. The filter itself
//! never touches the filesystem and never reloads the collection.

use std::path::Path;

use tracing::info;

use crate::card::{Card, CardRecord};
use crate::error::Result;

/// Load the card roster from a JSON file.
///
/// Every record enters the directory visible, with a fresh id.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let content = std::fs::read_to_string(path)?;
    let cards = parse_roster(&content)?;
    info!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

fn parse_roster(content: &str) -> Result<Vec<Card>> {
    let records: Vec<CardRecord> = serde_json::from_str(content)?;
    Ok(records.into_iter().map(Card::from_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roster_builds_visible_cards() {
        let json = r#"[
            {"name": "Pizza Palace", "location": "New York, NY"},
            {"name": "Sushi Spot", "location": "Boston, MA", "description": "Omakase counter"}
        ]"#;
        #[expect(clippy::expect_used, reason = "test: well-formed roster must parse")]
        let cards = parse_roster(json).expect("well-formed roster must parse");
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(Card::is_visible));
        assert_ne!(cards[0].id, cards[1].id);
    }

    #[test]
    fn parse_roster_rejects_malformed_json() {
        assert!(parse_roster("{not a roster").is_err());
    }

    #[test]
    fn parse_roster_accepts_empty_list() {
        #[expect(clippy::expect_used, reason = "test: empty roster must parse")]
        let cards = parse_roster("[]").expect("empty roster must parse");
        assert!(cards.is_empty());
    }

    #[test]
    fn load_cards_reports_missing_file() {
        let missing = Path::new("/nonexistent/cardsift-roster.json");
        assert!(load_cards(missing).is_err());
    }
}
