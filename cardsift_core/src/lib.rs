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

pub mod card;
pub mod error;
pub mod filter;
pub mod query;
pub mod roster;

pub use card::{Card, CardRecord, Location};
pub use error::{Error, Result};
pub use filter::{FilterReport, apply_filter, card_matches};
pub use query::Query;
pub use roster::load_cards;
