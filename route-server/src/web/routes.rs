//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{LocationCode, TimeOfDay};
use crate::planner::{Criterion, Planner, SearchError, SearchRequest, rank_itineraries};

use super::dto::*;
use super::state::AppState;

/// Longest prefix of a rejected request body written to the log.
const MAX_LOGGED_BODY: usize = 512;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/itineraries/search", post(search_itineraries))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every location in the catalog, in catalog order.
async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations = state
        .catalog
        .locations()
        .iter()
        .map(|l| LocationResult::from_location(l))
        .collect();

    Json(LocationsResponse { locations })
}

/// Search for itineraries between two locations.
async fn search_itineraries(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchItinerariesResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: SearchItinerariesRequest = serde_json::from_slice(&body).map_err(|e| {
        let logged = &body[..body.len().min(MAX_LOGGED_BODY)];
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(logged),
            body_len = body.len(),
            "Rejected search body"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let origin = LocationCode::parse_normalized(&req.origin).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin code: {}", req.origin),
    })?;

    let destination =
        LocationCode::parse_normalized(&req.destination).map_err(|_| AppError::BadRequest {
            message: format!("Invalid destination code: {}", req.destination),
        })?;

    let criterion: Criterion = req.criterion.parse().map_err(|e| AppError::BadRequest {
        message: format!("Invalid criterion: {e}"),
    })?;

    let sort_by = req
        .sort_by
        .as_deref()
        .map(str::parse::<Criterion>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: format!("Invalid sort_by: {e}"),
        })?;

    let query_time =
        TimeOfDay::parse(req.departure_time.trim()).map_err(|e| AppError::BadRequest {
            message: format!("Invalid departure time {:?}: {e}", req.departure_time),
        })?;

    let request = SearchRequest::new(origin, destination, criterion, query_time);
    let planner = Planner::new(&state.catalog, &state.config);
    let mut result = planner.search(&request)?;

    if let Some(sort_by) = sort_by
        && sort_by != criterion
    {
        result.itineraries = rank_itineraries(result.itineraries, sort_by, query_time);
    }

    info!(
        origin = %request.origin,
        destination = %request.destination,
        criterion = %criterion,
        found = result.itineraries.len(),
        paths_explored = result.paths_explored,
        "Itinerary search served"
    );

    let itineraries = result
        .itineraries
        .iter()
        .map(|it| ItineraryResult::from_itinerary(it, query_time))
        .collect();

    Ok(Json(SearchItinerariesResponse {
        itineraries,
        paths_explored: result.paths_explored,
        truncated: result.truncated,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidQuery(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
