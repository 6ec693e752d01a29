//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::RouteCosts;

/// Shared application state.
///
/// The network is loaded once at startup and never mutated, so handlers
/// read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded lines, stations and graph
    pub network: Arc<Network>,

    /// Edge costs for route search
    pub costs: Arc<RouteCosts>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, costs: RouteCosts) -> Self {
        Self {
            network: Arc::new(network),
            costs: Arc::new(costs),
        }
    }
}
