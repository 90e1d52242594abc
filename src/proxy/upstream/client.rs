// Upstream client implementation
//
// All provider-specific knowledge (endpoints, URL shapes, where the API key
// goes) lives here. Swapping the mapping provider means replacing this file
// and nothing else.

use reqwest::{Client, Response};
use serde_json::Value;
use tokio::time::Duration;
use url::Url;

use crate::error::MapsError;
use crate::proxy::validate::{RoutePoints, StaticMapSpec, TileSpec};

// Production endpoints
const ROUTING_BASE_URL: &str = "https://router.hereapi.com/v8/routes";
const STATIC_IMAGE_BASE_URL: &str = "https://image.maps.hereapi.com/mia/v3/base/mc";
const TILE_BASE_URL: &str = "https://maps.hereapi.com/v3/base/mc";

const USER_AGENT: &str = concat!("maps-proxy/", env!("CARGO_PKG_VERSION"));

pub struct UpstreamClient {
    http_client: Client,
    routing_base: String,
    image_base: String,
    tile_base: String,
}

impl UpstreamClient {
    pub fn new(timeout_secs: u64) -> Self {
        Self::with_bases(
            timeout_secs,
            ROUTING_BASE_URL,
            STATIC_IMAGE_BASE_URL,
            TILE_BASE_URL,
        )
    }

    /// Base URLs are overridable so tests can point the client at a local
    /// stub server.
    pub fn with_bases(
        timeout_secs: u64,
        routing_base: &str,
        image_base: &str,
        tile_base: &str,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            routing_base: routing_base.to_string(),
            image_base: image_base.to_string(),
            tile_base: tile_base.to_string(),
        }
    }

    /// Build routing URL: car route between two points, summary included
    pub fn build_route_url(&self, api_key: &str, points: &RoutePoints) -> Result<Url, MapsError> {
        let (start_lat, start_lng) = points.origin;
        let (end_lat, end_lng) = points.destination;

        Url::parse_with_params(
            &self.routing_base,
            &[
                ("transportMode", "car"),
                ("origin", &format!("{},{}", start_lat, start_lng)),
                ("destination", &format!("{},{}", end_lat, end_lng)),
                ("return", "polyline,summary"),
                ("apiKey", api_key),
            ],
        )
        .map_err(|e| MapsError::Configuration(format!("Invalid routing URL: {}", e)))
    }

    /// Build static map image URL: rendered raster centered at (lat,lng)
    pub fn build_static_url(&self, api_key: &str, spec: &StaticMapSpec) -> Result<Url, MapsError> {
        let raw = format!(
            "{}/center:{},{};zoom={}/{}x{}/png8",
            self.image_base, spec.lat, spec.lng, spec.zoom, spec.width, spec.height
        );

        Url::parse_with_params(&raw, &[("apiKey", api_key)])
            .map_err(|e| MapsError::Configuration(format!("Invalid static map URL: {}", e)))
    }

    /// Build tile URL, slippy-map addressed as {z}/{x}/{y}
    pub fn build_tile_url(&self, api_key: &str, spec: &TileSpec) -> Result<Url, MapsError> {
        let raw = format!("{}/{}/{}/{}/png8", self.tile_base, spec.z, spec.x, spec.y);

        Url::parse_with_params(&raw, &[("apiKey", api_key)])
            .map_err(|e| MapsError::Configuration(format!("Invalid tile URL: {}", e)))
    }

    /// Fetch a route from the provider. Non-2xx becomes an upstream error
    /// carrying the provider status; the caller decides what the client sees.
    pub async fn fetch_route(
        &self,
        api_key: &str,
        points: &RoutePoints,
    ) -> Result<Value, MapsError> {
        let url = self.build_route_url(api_key, points)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| MapsError::Upstream(format!("Routing request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MapsError::Upstream(format!(
                "Routing provider returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MapsError::Upstream(format!("Routing response parse failed: {}", e)))
    }

    /// Fetch an image (static render or tile). The response is handed back
    /// unread so the caller can stream the body.
    pub async fn fetch_image(&self, url: Url) -> Result<Response, MapsError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| MapsError::Upstream(format!("Image request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MapsError::Upstream(format!(
                "Image provider returned {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> UpstreamClient {
        UpstreamClient::new(30)
    }

    #[test]
    fn test_build_route_url() {
        let points = RoutePoints {
            origin: (6.5, 3.3),
            destination: (6.6, 3.4),
        };
        let url = client().build_route_url("test-key", &points).unwrap();

        assert_eq!(url.host_str(), Some("router.hereapi.com"));
        assert_eq!(url.path(), "/v8/routes");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("transportMode".into(), "car".into())));
        assert!(pairs.contains(&("origin".into(), "6.5,3.3".into())));
        assert!(pairs.contains(&("destination".into(), "6.6,3.4".into())));
        assert!(pairs.contains(&("return".into(), "polyline,summary".into())));
        assert!(pairs.contains(&("apiKey".into(), "test-key".into())));
    }

    #[test]
    fn test_build_static_url() {
        let spec = StaticMapSpec {
            lat: 6.5,
            lng: 3.3,
            zoom: 14,
            width: 600,
            height: 400,
        };
        let url = client().build_static_url("test-key", &spec).unwrap();

        assert_eq!(
            url.as_str(),
            "https://image.maps.hereapi.com/mia/v3/base/mc/center:6.5,3.3;zoom=14/600x400/png8?apiKey=test-key"
        );
    }

    #[test]
    fn test_build_tile_url() {
        let spec = TileSpec { x: 2, y: 1, z: 3 };
        let url = client().build_tile_url("test-key", &spec).unwrap();

        assert_eq!(
            url.as_str(),
            "https://maps.hereapi.com/v3/base/mc/3/2/1/png8?apiKey=test-key"
        );
    }

    #[test]
    fn api_key_appears_exactly_once() {
        let points = RoutePoints {
            origin: (0.0, 0.0),
            destination: (1.0, 1.0),
        };
        let url = client().build_route_url("secret-key", &points).unwrap();
        assert_eq!(url.as_str().matches("secret-key").count(), 1);
    }
}
