// Route summary transformation (provider payload -> client shape)

use serde::Serialize;
use serde_json::Value;

/// Sentinel for a provider payload that is missing the expected summary
/// nesting. The request still succeeds; the client renders "Unknown".
pub const UNKNOWN: &str = "Unknown";

/// Minimal route shape the client needs
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    /// Kilometers, one decimal place
    pub distance: String,
    /// Minutes, rounded up so displayed ETAs never understate travel time
    pub duration: String,
}

/// Reduce a provider routing payload to `{distance, duration}`.
///
/// Expected nesting is `routes[0].sections[0].summary.{length,duration}` with
/// length in meters and duration in seconds. Any missing level degrades to
/// the `"Unknown"` sentinel instead of failing the request.
pub fn summarize_route(payload: &Value) -> RouteSummary {
    let summary = payload
        .get("routes")
        .and_then(|routes| routes.get(0))
        .and_then(|route| route.get("sections"))
        .and_then(|sections| sections.get(0))
        .and_then(|section| section.get("summary"));

    let distance = summary
        .and_then(|s| s.get("length"))
        .and_then(Value::as_f64)
        .map(format_distance_km)
        .unwrap_or_else(|| UNKNOWN.to_string());

    let duration = summary
        .and_then(|s| s.get("duration"))
        .and_then(Value::as_f64)
        .map(format_duration_minutes)
        .unwrap_or_else(|| UNKNOWN.to_string());

    RouteSummary { distance, duration }
}

/// Meters to kilometers, one decimal place
fn format_distance_km(meters: f64) -> String {
    format!("{:.1}", meters / 1000.0)
}

/// Seconds to minutes, ceiling
fn format_duration_minutes(seconds: f64) -> String {
    format!("{}", (seconds / 60.0).ceil() as i64)
}
