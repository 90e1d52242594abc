// Route calculation handler

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::error::{MapsError, MapsResult};
use crate::proxy::handlers::require_api_key;
use crate::proxy::mappers::route::{summarize_route, RouteSummary};
use crate::proxy::server::AppState;
use crate::proxy::validate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
}

pub async fn handle_route(
    State(state): State<AppState>,
    Json(body): Json<RouteRequest>,
) -> MapsResult<Json<RouteSummary>> {
    let points = validate::route(&body)?;
    let api_key = require_api_key(&state.config)?;

    let payload = state
        .upstream
        .fetch_route(api_key, &points)
        .await
        .map_err(|e| {
            // Provider detail goes to the log only; the client gets a generic
            // failure with no upstream internals.
            error!("Route calculation failed: {}", e);
            MapsError::Upstream("Failed to calculate route".to_string())
        })?;

    Ok(Json(summarize_route(&payload)))
}
