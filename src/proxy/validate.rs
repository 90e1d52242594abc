// Request validation
//
// Pure checks performed before any outbound call: a rejected request costs no
// provider I/O. Validators read the wire shapes and hand back resolved values
// (defaults applied) without mutating their input.

use crate::error::MapsError;
use crate::proxy::handlers::imagery::{StaticMapParams, TileParams};
use crate::proxy::handlers::init::{Center, InitRequest};
use crate::proxy::handlers::route::RouteRequest;

pub const DEFAULT_ZOOM: u32 = 14;
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Validated route endpoints, (lat, lng) pairs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoints {
    pub origin: (f64, f64),
    pub destination: (f64, f64),
}

/// Validated static map request with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticMapSpec {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u32,
    pub width: u32,
    pub height: u32,
}

/// Validated slippy-map tile address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

pub fn init(req: &InitRequest) -> Result<(Center, u32), MapsError> {
    let center = req
        .center
        .as_ref()
        .ok_or_else(|| invalid("center is required"))?;

    let lat = require_coord("center.lat", center.lat)?;
    let lng = require_coord("center.lng", center.lng)?;

    Ok((Center { lat, lng }, req.zoom.unwrap_or(DEFAULT_ZOOM)))
}

pub fn route(req: &RouteRequest) -> Result<RoutePoints, MapsError> {
    Ok(RoutePoints {
        origin: (
            require_coord("startLat", req.start_lat)?,
            require_coord("startLng", req.start_lng)?,
        ),
        destination: (
            require_coord("endLat", req.end_lat)?,
            require_coord("endLng", req.end_lng)?,
        ),
    })
}

pub fn static_map(params: &StaticMapParams) -> Result<StaticMapSpec, MapsError> {
    Ok(StaticMapSpec {
        lat: require_coord("lat", params.lat)?,
        lng: require_coord("lng", params.lng)?,
        zoom: params.zoom.unwrap_or(DEFAULT_ZOOM),
        width: params.width.unwrap_or(DEFAULT_WIDTH),
        height: params.height.unwrap_or(DEFAULT_HEIGHT),
    })
}

pub fn tile(params: &TileParams) -> Result<TileSpec, MapsError> {
    Ok(TileSpec {
        x: require_index("x", params.x)?,
        y: require_index("y", params.y)?,
        z: require_index("z", params.z)?,
    })
}

fn require_coord(name: &str, value: Option<f64>) -> Result<f64, MapsError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(invalid(&format!("{} must be a finite number", name))),
        None => Err(invalid(&format!("{} is required", name))),
    }
}

fn require_index(name: &str, value: Option<u32>) -> Result<u32, MapsError> {
    value.ok_or_else(|| invalid(&format!("{} is required", name)))
}

fn invalid(message: &str) -> MapsError {
    MapsError::InvalidRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::handlers::init::CenterParam;

    fn full_route() -> RouteRequest {
        RouteRequest {
            start_lat: Some(6.5),
            start_lng: Some(3.3),
            end_lat: Some(6.6),
            end_lng: Some(3.4),
        }
    }

    #[test]
    fn route_accepts_all_four_coordinates() {
        let points = route(&full_route()).unwrap();
        assert_eq!(points.origin, (6.5, 3.3));
        assert_eq!(points.destination, (6.6, 3.4));
    }

    #[test]
    fn route_rejects_any_missing_coordinate() {
        for strip in 0..4 {
            let mut req = full_route();
            match strip {
                0 => req.start_lat = None,
                1 => req.start_lng = None,
                2 => req.end_lat = None,
                _ => req.end_lng = None,
            }
            assert!(matches!(route(&req), Err(MapsError::InvalidRequest(_))));
        }
    }

    #[test]
    fn route_accepts_zero_coordinates() {
        // 0.0 is a valid coordinate (the equator and the prime meridian exist)
        let mut req = full_route();
        req.start_lat = Some(0.0);
        req.start_lng = Some(0.0);
        assert!(route(&req).is_ok());
    }

    #[test]
    fn route_rejects_non_finite_coordinates() {
        let mut req = full_route();
        req.end_lat = Some(f64::NAN);
        assert!(matches!(route(&req), Err(MapsError::InvalidRequest(_))));
    }

    #[test]
    fn init_applies_default_zoom() {
        let req = InitRequest {
            center: Some(CenterParam {
                lat: Some(6.5),
                lng: Some(3.3),
            }),
            zoom: None,
        };
        let (center, zoom) = init(&req).unwrap();
        assert_eq!(center, Center { lat: 6.5, lng: 3.3 });
        assert_eq!(zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn init_rejects_missing_center() {
        let req = InitRequest {
            center: None,
            zoom: Some(10),
        };
        assert!(matches!(init(&req), Err(MapsError::InvalidRequest(_))));

        let req = InitRequest {
            center: Some(CenterParam {
                lat: Some(6.5),
                lng: None,
            }),
            zoom: None,
        };
        assert!(matches!(init(&req), Err(MapsError::InvalidRequest(_))));
    }

    #[test]
    fn static_map_applies_defaults() {
        let spec = static_map(&StaticMapParams {
            lat: Some(6.5),
            lng: Some(3.3),
            zoom: None,
            width: None,
            height: None,
        })
        .unwrap();

        assert_eq!(spec.zoom, 14);
        assert_eq!(spec.width, 600);
        assert_eq!(spec.height, 400);
    }

    #[test]
    fn tile_requires_full_triple() {
        let spec = tile(&TileParams {
            x: Some(2),
            y: Some(1),
            z: Some(3),
        })
        .unwrap();
        assert_eq!(spec, TileSpec { x: 2, y: 1, z: 3 });

        let missing = tile(&TileParams {
            x: Some(2),
            y: None,
            z: Some(3),
        });
        assert!(matches!(missing, Err(MapsError::InvalidRequest(_))));
    }
}
