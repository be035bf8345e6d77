//! Card types for the searchable directory.
//!
//! A card is one restaurant's display unit: a name, a raw location string
//! ("City, ST"), an optional description, and a visibility flag. The roster
//! is supplied at startup by whatever renders the listing; the filter never
//! creates or destroys cards, it only toggles visibility.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One roster entry as supplied externally (JSON).
///
/// Records carry no identity and no visibility state; both are assigned when
/// the record enters the live directory via [`Card::from_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    /// Display name, e.g. "Pizza Palace".
    pub name: String,

    /// Raw location text, city and state separated by a comma.
    pub location: String,

    /// Free-form description shown on the card. Rendered, never matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A live card in the directory.
#[derive(Debug, Clone)]
pub struct Card {
    /// Unique identifier, assigned at load time.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Raw location text as supplied, used for rendering. Matching goes
    /// through [`Location::parse`].
    pub location: String,

    /// Free-form description shown on the card.
    pub description: Option<String>,

    /// Whether the card is currently shown. Starts `true`; only the filter
    /// writes this.
    pub visible: bool,
}

impl Card {
    /// Create a visible card with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            location: location.into(),
            description: None,
            visible: true,
        }
    }

    /// Promote a roster record into a live card.
    #[must_use]
    pub fn from_record(record: CardRecord) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: record.name,
            location: record.location,
            description: record.description,
            visible: true,
        }
    }

    /// Parsed, match-ready view of this card's location text.
    #[must_use]
    pub fn location_parts(&self) -> Location {
        Location::parse(&self.location)
    }

    /// Whether the card is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Parsed view of a location string, normalized for matching.
///
/// The raw text is split on the first comma; both sides are trimmed and
/// lowercased. A location without a comma has no state part, and matching
/// against the missing part is a non-match rather than a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Lowercased city, e.g. "new york".
    pub city: String,

    /// Lowercased state, e.g. "ny". `None` when the raw text has no comma.
    pub state: Option<String>,
}

impl Location {
    /// Parse a raw location string. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split_once(',').map_or_else(
            || Self {
                city: raw.trim().to_lowercase(),
                state: None,
            },
            |(city, state)| Self {
                city: city.trim().to_lowercase(),
                state: Some(state.trim().to_lowercase()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_city_and_state() {
        let location = Location::parse("New York, NY");
        assert_eq!(location.city, "new york");
        assert_eq!(location.state, Some("ny".to_string()));
    }

    #[test]
    fn parse_without_comma_has_no_state() {
        let location = Location::parse("Reykjavik");
        assert_eq!(location.city, "reykjavik");
        assert_eq!(location.state, None);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let location = Location::parse("  Boston ,  MA  ");
        assert_eq!(location.city, "boston");
        assert_eq!(location.state, Some("ma".to_string()));
    }

    #[test]
    fn parse_splits_on_first_comma_only() {
        let location = Location::parse("Portland, OR, USA");
        assert_eq!(location.city, "portland");
        assert_eq!(location.state, Some("or, usa".to_string()));
    }

    #[test]
    fn new_card_starts_visible() {
        let card = Card::new("Pizza Palace", "New York, NY");
        assert!(card.is_visible());
        assert_eq!(card.location_parts().city, "new york");
    }

    #[test]
    fn from_record_assigns_identity() {
        let record = CardRecord {
            name: "Sushi Spot".to_string(),
            location: "Boston, MA".to_string(),
            description: Some("Omakase counter".to_string()),
        };
        let card = Card::from_record(record);
        assert!(card.visible);
        assert_eq!(card.name, "Sushi Spot");
        assert_eq!(card.description.as_deref(), Some("Omakase counter"));
    }

    #[test]
    fn record_description_defaults_to_none() {
        let json = r#"{"name": "Taco Stand", "location": "Austin, TX"}"#;
        #[expect(
            clippy::expect_used,
            reason = "test: well-formed record must deserialize"
        )]
        let record: CardRecord =
            serde_json::from_str(json).expect("well-formed record must deserialize");
        assert!(record.description.is_none());
    }
}
