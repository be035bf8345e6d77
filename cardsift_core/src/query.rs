//! Query normalization and tokenization.
//!
//! Search input arrives as free text. It is lowercased, trimmed, and split
//! on runs of whitespace into tokens; each input change produces a fresh
//! `Query` with no persisted identity.

/// A normalized search query: the cleaned-up source text plus its tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    tokens: Vec<String>,
}

impl Query {
    /// Normalize and tokenize raw search input.
    ///
    /// Empty or whitespace-only input yields zero tokens; see
    /// [`Self::is_match_all`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let text = input.trim().to_lowercase();
        let tokens = text.split_whitespace().map(str::to_owned).collect();
        Self { text, tokens }
    }

    /// True when the query carries no tokens and every card should be shown.
    ///
    /// This is an explicit rule, not a byproduct of tokenization: a blank
    /// search box means "no filter", so the whole directory stays visible.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The normalized tokens, in input order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The normalized (trimmed, lowercased) source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_and_splits() {
        let query = Query::parse("Pizza Boston");
        assert_eq!(query.tokens(), ["pizza", "boston"]);
        assert_eq!(query.text(), "pizza boston");
    }

    #[test]
    fn parse_collapses_whitespace_runs() {
        let query = Query::parse("  pizza \t boston  ");
        assert_eq!(query.tokens(), ["pizza", "boston"]);
    }

    #[test]
    fn empty_input_matches_all() {
        let query = Query::parse("");
        assert!(query.is_match_all());
        assert!(query.tokens().is_empty());
    }

    #[test]
    fn whitespace_only_input_matches_all() {
        let query = Query::parse("   \t ");
        assert!(query.is_match_all());
        assert!(query.tokens().is_empty());
        assert_eq!(query.text(), "");
    }

    #[test]
    fn single_token_does_not_match_all() {
        let query = Query::parse("  NYC ");
        assert!(!query.is_match_all());
        assert_eq!(query.tokens(), ["nyc"]);
    }
}
