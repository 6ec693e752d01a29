//! Route planner using uniform-cost search.
//!
//! This module answers "what is the cheapest way from station A to station
//! B?" over the loaded network. Staying on a line is cheap; changing line at
//! an interchange costs extra.

mod config;
mod search;

pub use config::RouteCosts;
pub use search::{Planner, RouteError};
