//! Domain types for the metro route server.
//!
//! Stations are plain values identified by `(name, line)`; routes are the
//! ordered station sequences produced by the planner.

mod route;
mod station;

pub use route::Route;
pub use station::Station;
