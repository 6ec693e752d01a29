//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::planner::Planner;
use crate::stations::search_stations;

use super::dto::*;
use super::state::AppState;

const MISSING_LINE: &str = "Missing line parameter";
const MISSING_ROUTE_PARAMS: &str = "Missing source or destination parameters";
const ROUTE_NOT_FOUND: &str = "Route not found";
const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/lines", get(lines))
        .route("/stations", get(stations))
        .route("/stationsByLine", get(stations_by_line))
        .route("/shortestPath", get(shortest_path))
        .route("/searchStations", get(search))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All line names, in load order.
async fn lines(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .network
            .line_names()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

/// Every station name, one entry per line the station is on.
async fn stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .network
            .station_names()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

/// Station names on one line, in file order.
async fn stations_by_line(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResponse<Vec<String>> {
    let req = StationsByLineRequest::from(params);
    let Some(line) = req.line else {
        return ApiResponse::error(MISSING_LINE);
    };

    ApiResponse::Success(
        state
            .network
            .station_names_on(&line)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

/// Cheapest route between two named stations.
async fn shortest_path(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResponse<ShortestPathResponse> {
    let req = ShortestPathRequest::from(params);
    let (Some(source), Some(destination)) = (req.source, req.destination) else {
        return ApiResponse::error(MISSING_ROUTE_PARAMS);
    };

    debug!(source = %source, destination = %destination, "finding shortest path");

    let planner = Planner::new(&state.network, &state.costs);
    match planner.find_shortest_path(&source, &destination) {
        Ok(route) => ApiResponse::Success(ShortestPathResponse::from_route(&route)),
        Err(e) => {
            info!(source = %source, destination = %destination, error = %e, "route not found");
            ApiResponse::error(ROUTE_NOT_FOUND)
        }
    }
}

/// Free-text station search.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<Vec<StationResult>> {
    let req = SearchStationsRequest::from(params);
    let Some(query) = req.query else {
        return Json(Vec::new());
    };

    let matches = search_stations(state.network.registry(), &query);
    debug!(query = %query, tier = ?matches.tier, found = matches.stations.len(), "station search");

    Json(
        matches
            .stations
            .into_iter()
            .map(StationResult::from_station)
            .collect(),
    )
}

/// Any path without a handler.
async fn not_found() -> ApiResponse<()> {
    ApiResponse::error(ENDPOINT_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::network::{Line, Network};
    use crate::planner::RouteCosts;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn line(name: &str, stations: &[&str]) -> Line {
        Line::new(
            name,
            stations
                .iter()
                .enumerate()
                .map(|(idx, s)| Station::new(*s, name, idx))
                .collect(),
        )
    }

    fn app() -> Router {
        let network = Network::from_lines(vec![
            line("Red", &["A", "B", "C"]),
            line("Blue", &["C", "D"]),
            line("Green", &["Central", "Central Park", "Hauz Khas"]),
        ]);
        create_router(AppState::new(network, RouteCosts::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lines_in_load_order() {
        let (status, body) = get_json("/lines").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Red", "Blue", "Green"]));
    }

    #[tokio::test]
    async fn stations_include_duplicates() {
        let (_, body) = get_json("/stations").await;
        assert_eq!(
            body,
            json!(["A", "B", "C", "C", "D", "Central", "Central Park", "Hauz Khas"])
        );
    }

    #[tokio::test]
    async fn stations_by_line() {
        let (_, body) = get_json("/stationsByLine?line=Blue").await;
        assert_eq!(body, json!(["C", "D"]));

        let (_, body) = get_json("/stationsByLine?line=Purple").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn stations_by_line_requires_line() {
        let (status, body) = get_json("/stationsByLine").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Missing line parameter"}));

        let (_, body) = get_json("/stationsByLine?line=").await;
        assert_eq!(body, json!({"error": "Missing line parameter"}));
    }

    #[tokio::test]
    async fn shortest_path_across_interchange() {
        let (status, body) = get_json("/shortestPath?source=a&destination=D").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "source": "A",
                "destination": "D",
                "path": ["A", "B", "C", "C", "D"],
                "lines": ["Red", "Red", "Red", "Blue", "Blue"],
                "interchanges": 1,
                "totalStations": 4
            })
        );
    }

    #[tokio::test]
    async fn shortest_path_to_self() {
        let (_, body) = get_json("/shortestPath?source=Hauz%20Khas&destination=hauz+khas").await;
        assert_eq!(body["path"], json!(["Hauz Khas"]));
        assert_eq!(body["lines"], json!(["Green"]));
        assert_eq!(body["interchanges"], json!(0));
        assert_eq!(body["totalStations"], json!(0));
    }

    #[tokio::test]
    async fn shortest_path_missing_params() {
        let (status, body) = get_json("/shortestPath?source=A").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"error": "Missing source or destination parameters"})
        );

        let (_, body) = get_json("/shortestPath?source=&destination=D").await;
        assert_eq!(
            body,
            json!({"error": "Missing source or destination parameters"})
        );
    }

    #[tokio::test]
    async fn repeated_params_use_first_value() {
        let (status, body) = get_json("/shortestPath?source=A&source=B&destination=B").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["path"], json!(["A", "B"]));

        let (status, body) = get_json("/stationsByLine?line=Blue&line=Red").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["C", "D"]));

        let (_, body) = get_json("/searchStations?query=&query=park").await;
        assert_eq!(body[0]["name"], json!("Central Park"));
    }

    #[tokio::test]
    async fn shortest_path_not_found() {
        let (status, body) = get_json("/shortestPath?source=A&destination=Nowhere").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Route not found"}));

        let (_, body) = get_json("/shortestPath?source=A&destination=Central").await;
        assert_eq!(body, json!({"error": "Route not found"}));
    }

    #[tokio::test]
    async fn search_stations_returns_station_objects() {
        let (_, body) = get_json("/searchStations?query=central").await;
        assert_eq!(body, json!([{"name": "Central", "line": "Green", "index": 0}]));

        let (_, body) = get_json("/searchStations?query=park").await;
        assert_eq!(
            body,
            json!([{"name": "Central Park", "line": "Green", "index": 1}])
        );
    }

    #[tokio::test]
    async fn search_stations_without_query_is_empty() {
        let (_, body) = get_json("/searchStations").await;
        assert_eq!(body, json!([]));

        let (_, body) = get_json("/searchStations?query=zzz").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unknown_path() {
        let (status, body) = get_json("/nope").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Endpoint not found"}));
    }

    #[tokio::test]
    async fn responses_allow_any_origin() {
        let request = Request::get("/lines")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
