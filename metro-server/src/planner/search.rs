//! Shortest-path route search.
//!
//! Uniform-cost search (Dijkstra) over the station graph. Each hop is priced
//! by [`RouteCosts`]: cheap when it stays on a line, dearer when it changes
//! line. The frontier may hold several entries for the same station at
//! different tentative costs; stale entries are skipped when popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, info};

use crate::domain::{Route, Station};
use crate::network::{Network, StationId};

use super::config::RouteCosts;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A station name did not resolve
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Both stations exist but no path joins them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

/// Route finder over a loaded network.
pub struct Planner<'a> {
    network: &'a Network,
    costs: &'a RouteCosts,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, costs: &'a RouteCosts) -> Self {
        Self { network, costs }
    }

    /// Find the cheapest route between two stations, by name.
    ///
    /// Names are resolved case-insensitively after trimming. If both names
    /// resolve to stations with the same name the route is just that station.
    pub fn find_shortest_path(&self, source: &str, destination: &str) -> Result<Route, RouteError> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;

        debug!(from = %source, to = %destination, "searching for route");

        if source.lookup_key() == destination.lookup_key() {
            return Ok(Route::new(
                source.clone(),
                destination.clone(),
                vec![source.clone()],
                0,
            ));
        }

        let graph = self.network.graph();
        let unreachable = || RouteError::Unreachable {
            from: source.name.clone(),
            to: destination.name.clone(),
        };
        // Registry stations are always interned by `Graph::build`, so these
        // lookups only fail for a graph built from a different registry.
        let start = graph.id_of(source).ok_or_else(unreachable)?;
        let goal = graph.id_of(destination).ok_or_else(unreachable)?;

        let Some((ids, cost)) = self.dijkstra(start, goal) else {
            info!(from = %source, to = %destination, "no route found");
            return Err(unreachable());
        };

        let stops = ids.into_iter().map(|id| graph.station(id).clone()).collect();
        Ok(Route::new(source.clone(), destination.clone(), stops, cost))
    }

    fn resolve(&self, name: &str) -> Result<&'a Station, RouteError> {
        self.network
            .registry()
            .get(name)
            .ok_or_else(|| RouteError::UnknownStation(name.trim().to_string()))
    }

    /// Run the search, returning the path (start first) and its cost.
    fn dijkstra(&self, start: StationId, goal: StationId) -> Option<(Vec<StationId>, u32)> {
        let graph = self.network.graph();

        let mut distances: HashMap<StationId, u32> = HashMap::new();
        let mut previous: HashMap<StationId, StationId> = HashMap::new();
        let mut finalized: HashSet<StationId> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        distances.insert(start, 0);
        frontier.push(Reverse((0u32, start)));

        while let Some(Reverse((cost, current))) = frontier.pop() {
            if current == goal {
                break;
            }
            if !finalized.insert(current) {
                continue;
            }

            let here = graph.station(current);
            for next in graph.neighbours(current) {
                if finalized.contains(&next) {
                    continue;
                }
                let next_cost =
                    cost.saturating_add(self.costs.edge_cost(here, graph.station(next)));
                if next_cost < distances.get(&next).copied().unwrap_or(u32::MAX) {
                    distances.insert(next, next_cost);
                    previous.insert(next, current);
                    frontier.push(Reverse((next_cost, next)));
                }
            }
        }

        if goal != start && !previous.contains_key(&goal) {
            return None;
        }

        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            current = *previous.get(&current)?;
            path.push(current);
        }
        path.reverse();

        Some((path, distances.get(&goal).copied().unwrap_or(0)))
    }
}
