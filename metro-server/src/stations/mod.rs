//! Station lookup by free-text query.
//!
//! Search runs over the loaded registry and returns stations in the order
//! they were loaded, not ranked by relevance.

mod search;

pub use search::{MatchTier, SearchMatches, search_stations};
