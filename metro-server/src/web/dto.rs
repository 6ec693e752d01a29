//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{Route, Station};

/// Raw query string pairs, in request order.
///
/// Blank values are ignored and a repeated key keeps its first value, so
/// `?source=&source=A&source=B` reads `source` as `A`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First non-empty value given for `key`.
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
    }
}

/// Query for `/stationsByLine`.
#[derive(Debug)]
pub struct StationsByLineRequest {
    /// Exact line name
    pub line: Option<String>,
}

impl From<QueryParams> for StationsByLineRequest {
    fn from(params: QueryParams) -> Self {
        Self {
            line: params.first("line"),
        }
    }
}

/// Query for `/shortestPath`.
#[derive(Debug)]
pub struct ShortestPathRequest {
    /// Origin station name
    pub source: Option<String>,

    /// Destination station name
    pub destination: Option<String>,
}

impl From<QueryParams> for ShortestPathRequest {
    fn from(params: QueryParams) -> Self {
        Self {
            source: params.first("source"),
            destination: params.first("destination"),
        }
    }
}

/// Query for `/searchStations`.
#[derive(Debug)]
pub struct SearchStationsRequest {
    /// Free-text query
    pub query: Option<String>,
}

impl From<QueryParams> for SearchStationsRequest {
    fn from(params: QueryParams) -> Self {
        Self {
            query: params.first("query"),
        }
    }
}

/// A route between two stations.
#[derive(Debug, Serialize)]
pub struct ShortestPathResponse {
    /// Resolved origin station name
    pub source: String,

    /// Resolved destination station name
    pub destination: String,

    /// Station names along the route
    pub path: Vec<String>,

    /// Line of each station in `path`
    pub lines: Vec<String>,

    /// Number of line changes
    pub interchanges: usize,

    /// Number of hops
    #[serde(rename = "totalStations")]
    pub total_stations: usize,
}

impl ShortestPathResponse {
    pub fn from_route(route: &Route) -> Self {
        Self {
            source: route.source.name.clone(),
            destination: route.destination.name.clone(),
            path: route.path(),
            lines: route.lines(),
            interchanges: route.interchanges(),
            total_stations: route.total_stations(),
        }
    }
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub line: String,
    pub index: usize,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            line: station.line.clone(),
            index: station.index,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Either a result or an error body.
///
/// Both variants are sent with status 200; callers tell them apart by the
/// presence of an `error` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(T),
    Error(ErrorResponse),
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error(ErrorResponse::new(message))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
