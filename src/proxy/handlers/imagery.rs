// Static map and tile handlers
//
// Both stream provider PNG bytes through unchanged. Their failure policies
// differ on purpose: a static map is rendered by an `<img>` tag that cannot
// display a JSON error, so it degrades to a placeholder redirect; tiles are
// requested in bulk by a map widget with its own fallback handling, so they
// fail with a JSON error.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{error, warn};

use crate::error::{MapsError, MapsResult};
use crate::proxy::handlers::require_api_key;
use crate::proxy::server::AppState;
use crate::proxy::validate::{self, StaticMapSpec};

/// Renders and tiles are immutable for a given coordinate/zoom/size tuple
/// within a day, so both endpoints share one cache directive.
static IMAGE_CACHE_CONTROL: Lazy<HeaderValue> =
    Lazy::new(|| HeaderValue::from_static("public, max-age=86400"));

#[derive(Debug, Deserialize)]
pub struct StaticMapParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub zoom: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TileParams {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub z: Option<u32>,
}

pub async fn handle_static_map(
    State(state): State<AppState>,
    Query(params): Query<StaticMapParams>,
) -> Response {
    // Missing coordinates are still a 400; the placeholder covers only
    // post-validation failures.
    let spec = match validate::static_map(&params) {
        Ok(spec) => spec,
        Err(e) => return e.into_response(),
    };

    match fetch_static(&state, &spec).await {
        Ok(upstream) => image_response(upstream),
        Err(e) => {
            warn!("Static map fetch failed, redirecting to placeholder: {}", e);
            Redirect::temporary(&state.config.placeholder_url).into_response()
        }
    }
}

async fn fetch_static(
    state: &AppState,
    spec: &StaticMapSpec,
) -> Result<reqwest::Response, MapsError> {
    let api_key = require_api_key(&state.config)?;
    let url = state.upstream.build_static_url(api_key, spec)?;
    state.upstream.fetch_image(url).await
}

pub async fn handle_tile(
    State(state): State<AppState>,
    Query(params): Query<TileParams>,
) -> MapsResult<Response> {
    let spec = validate::tile(&params)?;
    let api_key = require_api_key(&state.config)?;
    let url = state.upstream.build_tile_url(api_key, &spec)?;

    let upstream = state.upstream.fetch_image(url).await.map_err(|e| {
        error!("Tile fetch failed: {}", e);
        MapsError::Upstream("Failed to fetch map tile".to_string())
    })?;

    Ok(image_response(upstream))
}

/// Stream the provider body through with uniform image headers.
fn image_response(upstream: reqwest::Response) -> Response {
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    headers.insert(header::CACHE_CONTROL, IMAGE_CACHE_CONTROL.clone());
    response
}
