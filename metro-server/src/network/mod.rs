//! The loaded metro network.
//!
//! [`Network`] is an immutable snapshot of every line, station and edge,
//! built once at startup and shared read-only between requests.

mod error;
mod graph;
mod loader;
mod registry;

use std::path::Path;

use tracing::info;

pub use error::{LineFileError, LoadError};
pub use graph::{Graph, StationId};
pub use loader::{
    EXCLUDED_PREFIX, extract_name, line_files, load_line_file, load_lines, parse_line,
};
pub use registry::{Line, LineCatalog, Registry};

/// Lines, stations and adjacency for the whole network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    catalog: LineCatalog,
    registry: Registry,
    graph: Graph,
}

impl Network {
    /// Build a network from already-parsed lines, in load order.
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        let mut catalog = LineCatalog::new();
        let mut registry = Registry::new();

        for line in lines {
            for station in &line.stations {
                registry.register(station.clone());
            }
            catalog.insert(line);
        }

        let graph = Graph::build(&catalog, &registry);

        Self {
            catalog,
            registry,
            graph,
        }
    }

    /// Load every line file in `dir` and build the network.
    ///
    /// Fails only if the directory itself is missing or unreadable.
    pub fn load(dir: &Path, excluded_prefix: &str) -> Result<Self, LoadError> {
        let network = Self::from_lines(load_lines(dir, excluded_prefix)?);

        info!(
            stations = network.registry.len(),
            lines = network.catalog.len(),
            names = network.registry.name_count(),
            edges = network.graph.edge_count(),
            "network loaded"
        );

        Ok(network)
    }

    pub fn catalog(&self) -> &LineCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Line names in load order.
    pub fn line_names(&self) -> Vec<&str> {
        self.catalog.names()
    }

    /// Station names on a line in file order, or empty for an unknown line.
    pub fn station_names_on(&self, line: &str) -> Vec<&str> {
        self.catalog
            .get(line)
            .map(|l| l.stations.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Every station name, one per registered station.
    pub fn station_names(&self) -> Vec<&str> {
        self.registry.all().iter().map(|s| s.name.as_str()).collect()
    }
}
