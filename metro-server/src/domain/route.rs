//! A found route between two stations.

use super::Station;

/// A route through the network, as an ordered list of stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Resolved origin station.
    pub source: Station,

    /// Resolved destination station.
    pub destination: Station,

    /// Every station along the route, origin first.
    pub stops: Vec<Station>,

    /// Sum of the edge costs along the route.
    pub cost: u32,
}

impl Route {
    /// Build a route from its stops, origin first.
    ///
    /// `stops` must not be empty.
    pub fn new(source: Station, destination: Station, stops: Vec<Station>, cost: u32) -> Self {
        Self {
            source,
            destination,
            stops,
            cost,
        }
    }

    /// Station names along the route.
    pub fn path(&self) -> Vec<String> {
        self.stops.iter().map(|s| s.name.clone()).collect()
    }

    /// Line of each station along the route, parallel to [`Route::path`].
    pub fn lines(&self) -> Vec<String> {
        self.stops.iter().map(|s| s.line.clone()).collect()
    }

    /// Number of consecutive stop pairs that change line.
    pub fn interchanges(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| !pair[0].shares_line_with(&pair[1]))
            .count()
    }

    /// Number of hops, i.e. stops minus one.
    pub fn total_stations(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}
