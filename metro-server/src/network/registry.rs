//! Line catalog and station registry.

use std::collections::HashMap;

use crate::domain::Station;

/// A named, ordered sequence of stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line name, taken from the source file name.
    pub name: String,

    /// Stations in file order.
    pub stations: Vec<Station>,
}

impl Line {
    /// Create a line from its stations.
    pub fn new(name: impl Into<String>, stations: Vec<Station>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }

    /// Stations ordered by `index`, ties kept in file order.
    pub fn ordered_stations(&self) -> Vec<&Station> {
        let mut ordered: Vec<&Station> = self.stations.iter().collect();
        ordered.sort_by_key(|s| s.index);
        ordered
    }
}

/// All lines, in the order they were loaded.
#[derive(Debug, Clone, Default)]
pub struct LineCatalog {
    lines: Vec<Line>,
}

impl LineCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    ///
    /// A line whose name is already present replaces the earlier one in place.
    pub fn insert(&mut self, line: Line) {
        match self.lines.iter_mut().find(|l| l.name == line.name) {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
    }

    /// Look up a line by exact name.
    pub fn get(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// Line names in load order.
    pub fn names(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.name.as_str()).collect()
    }

    /// Iterate over lines in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Every loaded station plus a case-insensitive name index.
///
/// When several stations share a lowercase name the index keeps the one
/// registered last.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    by_name: HashMap<String, Station>,
    all: Vec<Station>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, overwriting any index entry with the same lowercase name.
    pub fn register(&mut self, station: Station) {
        self.by_name.insert(station.lookup_key(), station.clone());
        self.all.push(station);
    }

    /// Resolve a station by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.by_name.get(&name.trim().to_lowercase())
    }

    /// All stations in registration order, duplicates included.
    pub fn all(&self) -> &[Station] {
        &self.all
    }

    /// Number of distinct lowercase names in the index.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    /// Number of registered stations, duplicates included.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
