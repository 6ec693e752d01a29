//! Metro route server.
//!
//! Loads a metro network from per-line JSON files and serves shortest
//! routes and station search over HTTP.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stations;
pub mod web;
