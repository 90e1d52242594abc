// Map init handler
//
// Purely local: resolves the default zoom and stamps the response. No
// provider call is made.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::MapsResult;
use crate::proxy::validate;

#[derive(Debug, Deserialize)]
pub struct InitRequest {
    pub center: Option<CenterParam>,
    pub zoom: Option<u32>,
}

/// Wire-side center: fields optional so presence is checked by the
/// validator, not by a deserialization failure with an opaque message.
#[derive(Debug, Deserialize)]
pub struct CenterParam {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Center {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub center: Center,
    pub zoom: u32,
    /// Epoch milliseconds
    pub timestamp: i64,
}

pub async fn handle_init(Json(body): Json<InitRequest>) -> MapsResult<Json<InitResponse>> {
    let (center, zoom) = validate::init(&body)?;

    Ok(Json(InitResponse {
        center,
        zoom,
        timestamp: Utc::now().timestamp_millis(),
    }))
}
