//! Visibility filtering over the card collection.
//!
//! One operation drives everything: apply the current query to every card,
//! synchronously, setting each card's visibility flag. A card stays visible
//! when any query token is a substring of its lowercased name, city, or
//! state; a token-less query shows the whole directory.
//!
//! The functions here hold no handles to an input field or a card
//! collection; both arrive per call, so the filter can be exercised in
//! isolation.

use tracing::debug;

use crate::card::Card;
use crate::query::Query;

/// Counts from one filter pass, for status lines and logging.
///
/// The filter's contract is the side effect on the cards; callers never need
/// the report to decide visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    /// Cards left visible by the pass.
    pub visible: usize,
    /// Cards hidden by the pass.
    pub hidden: usize,
}

impl FilterReport {
    /// Total cards examined.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.visible + self.hidden
    }
}

/// Decide whether a single card matches the query.
///
/// Tokens combine with OR: one matching token is enough. A card whose
/// location has no state part can only match on name or city.
#[must_use]
pub fn card_matches(card: &Card, query: &Query) -> bool {
    if query.is_match_all() {
        return true;
    }

    let name = card.name.to_lowercase();
    let location = card.location_parts();

    query.tokens().iter().any(|token| {
        name.contains(token.as_str())
            || location.city.contains(token.as_str())
            || location
                .state
                .as_deref()
                .is_some_and(|state| state.contains(token.as_str()))
    })
}

/// Run one filter pass, updating every card's visibility flag in place.
///
/// The pass is synchronous and unbatched; when it returns, the flags are
/// final for this query.
pub fn apply_filter(query: &Query, cards: &mut [Card]) -> FilterReport {
    let mut visible = 0;
    for card in cards.iter_mut() {
        card.visible = card_matches(card, query);
        if card.visible {
            visible += 1;
        }
    }

    let report = FilterReport {
        visible,
        hidden: cards.len() - visible,
    };
    debug!(
        "filter pass: query=\"{}\", {} visible, {} hidden",
        query.text(),
        report.visible,
        report.hidden
    );
    report
}
