//! OpenCage forward-geocoding client.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::error::GeoError;
use crate::{Coordinates, Geocoder, LocationQuery};

#[derive(Debug, Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageResult>,
    #[serde(default)]
    status: Option<OpenCageStatus>,
}

#[derive(Debug, Deserialize)]
struct OpenCageResult {
    geometry: Geometry,
    #[serde(default)]
    formatted: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OpenCageStatus {
    code: u16,
    message: String,
}

/// Decode an OpenCage JSON body into the first result's coordinates.
pub fn parse_response(body: &str) -> Result<Option<Coordinates>, GeoError> {
    let resp: OpenCageResponse = serde_json::from_str(body)?;
    if let Some(status) = &resp.status {
        if status.code != 200 {
            return Err(GeoError::Status {
                code: status.code,
                message: status.message.clone(),
            });
        }
    }
    let Some(first) = resp.results.into_iter().next() else {
        return Ok(None);
    };
    let Geometry { lat, lng } = first.geometry;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(GeoError::Decode(format!(
            "coordinates out of range: {lat}, {lng}"
        )));
    }
    Ok(Some(Coordinates {
        latitude_deg: lat,
        longitude_deg: lng,
        formatted: first.formatted,
    }))
}

fn status_message(body: &str) -> String {
    serde_json::from_str::<OpenCageResponse>(body)
        .ok()
        .and_then(|r| r.status)
        .map(|s| s.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}

/// Blocking HTTP client for the OpenCage v1 JSON API.
pub struct OpenCageGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for OpenCageGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenCageGeocoder")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenCageGeocoder {
    pub fn new(api_key: &str, endpoint: &str, timeout: Duration) -> Result<Self, GeoError> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, api_key, endpoint)
    }

    /// Use a caller-built HTTP client (proxy, TLS or timeout settings).
    pub fn with_client(client: Client, api_key: &str, endpoint: &str) -> Result<Self, GeoError> {
        if api_key.trim().is_empty() {
            return Err(GeoError::InvalidConfig("api key must not be empty"));
        }
        if endpoint.trim().is_empty() {
            return Err(GeoError::InvalidConfig("endpoint must not be empty"));
        }
        Ok(Self {
            client,
            endpoint: endpoint.trim().to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    fn request_url(&self, query: &LocationQuery) -> String {
        format!(
            "{}?q={}&key={}&limit=1&no_annotations=1",
            self.endpoint,
            encode(&query.text()),
            encode(&self.api_key)
        )
    }
}

impl Geocoder for OpenCageGeocoder {
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        if query.is_blank() {
            warn!("empty location query");
            return Ok(None);
        }
        debug!("geocoding {query:?} via {}", self.endpoint);
        let resp = self.client.get(self.request_url(query)).send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(GeoError::Status {
                code: status.as_u16(),
                message: status_message(&body),
            });
        }
        let found = parse_response(&body)?;
        if found.is_none() {
            warn!("no results for {query}");
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_result_used() {
        let body = r#"{
            "results": [
                {
                    "geometry": {"lat": 18.5204, "lng": 73.8567},
                    "formatted": "Pune, Maharashtra, India"
                },
                {"geometry": {"lat": 1.0, "lng": 2.0}}
            ],
            "status": {"code": 200, "message": "OK"},
            "total_results": 2
        }"#;
        let c = parse_response(body).unwrap().unwrap();
        assert_eq!(c.latitude_deg, 18.5204);
        assert_eq!(c.longitude_deg, 73.8567);
        assert_eq!(c.formatted.as_deref(), Some("Pune, Maharashtra, India"));
    }

    #[test]
    fn empty_results_is_not_found() {
        let body =
            r#"{"results": [], "status": {"code": 200, "message": "OK"}, "total_results": 0}"#;
        assert_eq!(parse_response(body).unwrap(), None);
    }

    #[test]
    fn error_status_in_body() {
        let body = r#"{"results": [], "status": {"code": 401, "message": "invalid API key"}}"#;
        assert_eq!(
            parse_response(body),
            Err(GeoError::Status {
                code: 401,
                message: "invalid API key".to_string()
            })
        );
    }

    #[test]
    fn garbage_is_decode_error() {
        assert!(matches!(parse_response("<html>"), Err(GeoError::Decode(_))));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let body = r#"{"results": [{"geometry": {"lat": 123.0, "lng": 0.0}}]}"#;
        assert!(matches!(parse_response(body), Err(GeoError::Decode(_))));
    }

    #[test]
    fn url_encodes_query_and_key() {
        let g =
            OpenCageGeocoder::new("k&y", "http://localhost/geo", Duration::from_secs(1)).unwrap();
        let url = g.request_url(&LocationQuery::new("São Paulo", "SP"));
        assert_eq!(
            url,
            "http://localhost/geo?q=S%C3%A3o%20Paulo%2C%20SP&key=k%26y&limit=1&no_annotations=1"
        );
    }

    #[test]
    fn debug_hides_key() {
        let g = OpenCageGeocoder::new("secret", "http://localhost/geo", Duration::from_secs(1))
            .unwrap();
        assert!(!format!("{g:?}").contains("secret"));
    }

    #[test]
    fn empty_key_rejected() {
        assert!(matches!(
            OpenCageGeocoder::new(" ", "http://localhost/geo", Duration::from_secs(1)),
            Err(GeoError::InvalidConfig(_))
        ));
    }
}
