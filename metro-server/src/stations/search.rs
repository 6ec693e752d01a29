//! Tiered free-text station search.

use crate::domain::Station;
use crate::network::Registry;

/// Which rule produced a set of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Whole name equals the query.
    Exact,
    /// Name contains the query.
    Substring,
    /// Name contains at least one word of a multi-word query.
    Token,
}

/// Search results, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatches<'a> {
    pub tier: Option<MatchTier>,
    pub stations: Vec<&'a Station>,
}

impl<'a> SearchMatches<'a> {
    fn none() -> Self {
        Self {
            tier: None,
            stations: Vec::new(),
        }
    }
}

/// Find stations matching a free-text query.
///
/// Case-insensitive. Tries exact name matches, then substring matches,
/// then (for queries containing a space) matches on any word longer than
/// one character. The first tier with results wins; tiers are never
/// combined. An empty query matches nothing.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
/// use metro_server::network::Registry;
/// use metro_server::stations::search_stations;
///
/// let mut registry = Registry::new();
/// registry.register(Station::new("Central", "Red", 0));
/// registry.register(Station::new("Central Park", "Blue", 3));
///
/// let matches = search_stations(&registry, "central");
/// assert_eq!(matches.stations.len(), 1);
/// assert_eq!(matches.stations[0].name, "Central");
/// ```
pub fn search_stations<'a>(registry: &'a Registry, query: &str) -> SearchMatches<'a> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchMatches::none();
    }

    let lowered: Vec<(String, &Station)> = registry
        .all()
        .iter()
        .map(|s| (s.lookup_key(), s))
        .collect();

    let collect = |tier: MatchTier, pred: &dyn Fn(&str) -> bool| {
        let stations: Vec<&Station> = lowered
            .iter()
            .filter(|(name, _)| pred(name))
            .map(|(_, s)| *s)
            .collect();
        (!stations.is_empty()).then_some(SearchMatches {
            tier: Some(tier),
            stations,
        })
    };

    if let Some(found) = collect(MatchTier::Exact, &|name: &str| name == query) {
        return found;
    }

    if let Some(found) = collect(MatchTier::Substring, &|name: &str| name.contains(&query)) {
        return found;
    }

    if query.contains(' ') {
        let words: Vec<&str> = query
            .split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .collect();
        if let Some(found) = collect(MatchTier::Token, &|name: &str| {
            words.iter().any(|w| name.contains(w))
        }) {
            return found;
        }
    }

    SearchMatches::none()
}
