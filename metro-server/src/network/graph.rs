//! Undirected station adjacency graph.
//!
//! Stations are interned into dense [`StationId`]s so the route finder can
//! work with integer keys. Two kinds of edge exist:
//!
//! - line edges between stations that are consecutive on a line (after
//!   sorting by `index`)
//! - interchange edges between every pair of stations that share a name
//!
//! Edges carry no weight here; the planner prices them from the stations'
//! lines.

use std::collections::{BTreeSet, HashMap};

use crate::domain::Station;

use super::registry::{LineCatalog, Registry};

/// Dense identifier for a distinct station within a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub usize);

/// Adjacency sets keyed by station.
///
/// Symmetric and free of self-loops by construction. Every station in the
/// registry has an entry, even when it has no neighbours.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    ids: HashMap<Station, StationId>,
    adjacency: Vec<BTreeSet<StationId>>,
}

impl Graph {
    /// Build the graph from the loaded lines and registered stations.
    pub fn build(catalog: &LineCatalog, registry: &Registry) -> Self {
        let mut graph = Self::default();

        for station in registry.all() {
            graph.intern(station);
        }

        for line in catalog.iter() {
            for pair in line.ordered_stations().windows(2) {
                let a = graph.intern(pair[0]);
                let b = graph.intern(pair[1]);
                graph.add_edge(a, b);
            }
        }

        let mut by_name: HashMap<&str, Vec<StationId>> = HashMap::new();
        for (idx, station) in graph.stations.iter().enumerate() {
            by_name
                .entry(station.name.as_str())
                .or_default()
                .push(StationId(idx));
        }

        let mut interchange_edges = Vec::new();
        for group in by_name.values().filter(|g| g.len() > 1) {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    interchange_edges.push((a, b));
                }
            }
        }
        for (a, b) in interchange_edges {
            graph.add_edge(a, b);
        }

        graph
    }

    /// Return the id for `station`, adding it if unseen.
    ///
    /// The first value interned for a given `(name, line)` is the one kept.
    fn intern(&mut self, station: &Station) -> StationId {
        if let Some(&id) = self.ids.get(station) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.stations.push(station.clone());
        self.ids.insert(station.clone(), id);
        self.adjacency.push(BTreeSet::new());
        id
    }

    fn add_edge(&mut self, a: StationId, b: StationId) {
        if a == b {
            return;
        }
        self.adjacency[a.0].insert(b);
        self.adjacency[b.0].insert(a);
    }

    /// Look up the id of a station by identity.
    pub fn id_of(&self, station: &Station) -> Option<StationId> {
        self.ids.get(station).copied()
    }

    /// The station behind an id.
    ///
    /// Panics if `id` did not come from this graph.
    pub(crate) fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// Neighbours of a station, in ascending id order.
    pub fn neighbours(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// True if an edge joins the two stations.
    pub fn are_adjacent(&self, a: &Station, b: &Station) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(a), Some(b)) => self.adjacency[a.0].contains(&b),
            _ => false,
        }
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::registry::Line;

    fn build(lines: Vec<Line>) -> Graph {
        let mut catalog = LineCatalog::new();
        let mut registry = Registry::new();
        for line in lines {
            for station in &line.stations {
                registry.register(station.clone());
            }
            catalog.insert(line);
        }
        Graph::build(&catalog, &registry)
    }

    fn line(name: &str, stations: &[(&str, usize)]) -> Line {
        Line::new(
            name,
            stations
                .iter()
                .map(|(s, idx)| Station::new(*s, name, *idx))
                .collect(),
        )
    }

    fn st(name: &str, line: &str) -> Station {
        Station::new(name, line, 0)
    }

    #[test]
    fn connects_consecutive_line_stations() {
        let graph = build(vec![line("Red", &[("A", 0), ("B", 1), ("C", 2)])]);

        assert!(graph.are_adjacent(&st("A", "Red"), &st("B", "Red")));
        assert!(graph.are_adjacent(&st("B", "Red"), &st("C", "Red")));
        assert!(!graph.are_adjacent(&st("A", "Red"), &st("C", "Red")));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn sorts_by_index_before_connecting() {
        let graph = build(vec![line("Red", &[("C", 2), ("A", 0), ("B", 1)])]);

        assert!(graph.are_adjacent(&st("A", "Red"), &st("B", "Red")));
        assert!(graph.are_adjacent(&st("B", "Red"), &st("C", "Red")));
        assert!(!graph.are_adjacent(&st("C", "Red"), &st("A", "Red")));
    }

    #[test]
    fn single_station_line_has_no_edges() {
        let graph = build(vec![line("Stub", &[("Lonely", 0)])]);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
        let id = graph.id_of(&st("Lonely", "Stub")).unwrap();
        assert_eq!(graph.neighbours(id).count(), 0);
    }

    #[test]
    fn interchanges_form_complete_subgraph() {
        let graph = build(vec![
            line("Red", &[("Hub", 0)]),
            line("Blue", &[("Hub", 0)]),
            line("Green", &[("Hub", 0)]),
        ]);

        assert!(graph.are_adjacent(&st("Hub", "Red"), &st("Hub", "Blue")));
        assert!(graph.are_adjacent(&st("Hub", "Blue"), &st("Hub", "Green")));
        assert!(graph.are_adjacent(&st("Hub", "Red"), &st("Hub", "Green")));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn interchange_names_are_case_sensitive() {
        let graph = build(vec![line("Red", &[("Hub", 0)]), line("Blue", &[("HUB", 0)])]);

        assert!(!graph.are_adjacent(&st("Hub", "Red"), &st("HUB", "Blue")));
    }

    #[test]
    fn repeated_station_on_line_makes_no_self_loop() {
        let graph = build(vec![line("Loop", &[("A", 0), ("A", 1), ("B", 2)])]);

        let a = graph.id_of(&st("A", "Loop")).unwrap();
        assert!(graph.neighbours(a).all(|n| n != a));
        assert!(graph.are_adjacent(&st("A", "Loop"), &st("B", "Loop")));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn first_interned_station_is_kept() {
        let graph = build(vec![line("Loop", &[("A", 0), ("B", 1), ("A", 5)])]);

        let a = graph.id_of(&st("A", "Loop")).unwrap();
        assert_eq!(graph.station(a).index, 0);
    }

    #[test]
    fn red_blue_scenario_edges() {
        let graph = build(vec![
            line("Red", &[("A", 0), ("B", 1), ("C", 2)]),
            line("Blue", &[("C", 0), ("D", 1)]),
        ]);

        assert!(graph.are_adjacent(&st("A", "Red"), &st("B", "Red")));
        assert!(graph.are_adjacent(&st("B", "Red"), &st("C", "Red")));
        assert!(graph.are_adjacent(&st("C", "Red"), &st("C", "Blue")));
        assert!(graph.are_adjacent(&st("C", "Blue"), &st("D", "Blue")));
        assert_eq!(graph.edge_count(), 4);
    }
}
