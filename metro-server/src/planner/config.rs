//! Edge costs for route search.

use crate::domain::Station;

/// Cost parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCosts {
    /// Cost of a hop between two stations on the same line.
    pub same_line: u32,

    /// Cost of a hop that changes line.
    /// Higher than `same_line` so routes avoid needless changes.
    pub line_change: u32,
}

impl RouteCosts {
    /// Create a new cost table with the given parameters.
    pub fn new(same_line: u32, line_change: u32) -> Self {
        Self {
            same_line,
            line_change,
        }
    }

    /// Cost of travelling directly between two adjacent stations.
    pub fn edge_cost(&self, from: &Station, to: &Station) -> u32 {
        if from.shares_line_with(to) {
            self.same_line
        } else {
            self.line_change
        }
    }
}

impl Default for RouteCosts {
    fn default() -> Self {
        Self {
            same_line: 1,
            line_change: 3,
        }
    }
}
