use std::time::Duration;

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};

use crate::{
	config::Config,
	error::{ApiError, ApiResult},
	AppState,
};

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
	#[error("geocoding request failed: {0}")]
	Request(#[from] reqwest::Error),

	#[error("geocoder answered without a place name")]
	MissingName,

	#[error("geocoder returned unreadable coordinates '{0}'")]
	BadCoordinates(String),
}

/// Client for a Nominatim-compatible geocoding service.
#[derive(Debug, Clone)]
pub struct Geocoder {
	client: reqwest::Client,
	base_url: String,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
	pub location: String,
	pub lat: f64,
	pub lng: f64,
	/// `false` when `location` is the coordinate fallback.
	pub resolved: bool,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Place {
	pub location: String,
	pub lat: f64,
	pub lng: f64,
}

#[derive(serde::Deserialize, Debug)]
struct ReverseReply {
	display_name: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct SearchHit {
	display_name: String,
	lat: String,
	lon: String,
}

/// What the picker shows when no place name comes back.
pub fn coordinate_label(lat: f64, lng: f64) -> String {
	format!("{:.4}, {:.4}", lat, lng)
}

pub fn validate_coordinates(lat: f64, lng: f64) -> ApiResult<()> {
	if !lat.is_finite() || !lng.is_finite() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
		return Err(ApiError::InvalidCoordinates { lat, lng });
	}
	Ok(())
}

impl Geocoder {
	pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
		let client = reqwest::Client::builder().user_agent(user_agent).timeout(timeout).build()?;
		Ok(Geocoder {
			client,
			base_url: base_url.trim_end_matches('/').to_owned(),
		})
	}

	pub fn from_config(config: &Config) -> anyhow::Result<Self> {
		Geocoder::new(&config.geocoder_url, &config.geocoder_user_agent, config.geocoder_timeout)
	}

	/// Place name for a map click. Never fails: on any error the coordinates themselves are the label.
	pub async fn reverse(&self, lat: f64, lng: f64) -> ResolvedLocation {
		match self.try_reverse(lat, lng).await {
			Ok(location) => ResolvedLocation { location, lat, lng, resolved: true },
			Err(e) => {
				log::warn!("reverse geocoding ({}, {}) fell back to coordinates: {}", lat, lng, e);
				ResolvedLocation {
					location: coordinate_label(lat, lng),
					lat,
					lng,
					resolved: false,
				}
			}
		}
	}

	async fn try_reverse(&self, lat: f64, lng: f64) -> Result<String, GeocodeError> {
		let reply: ReverseReply = self
			.client
			.get(format!("{}/reverse", self.base_url))
			.query(&[("format", "jsonv2".to_owned()), ("lat", lat.to_string()), ("lon", lng.to_string())])
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		reply.display_name.filter(|name| !name.trim().is_empty()).ok_or(GeocodeError::MissingName)
	}

	/// First match for a typed address, if any.
	pub async fn search(&self, query: &str) -> Result<Option<Place>, GeocodeError> {
		let hits: Vec<SearchHit> = self
			.client
			.get(format!("{}/search", self.base_url))
			.query(&[("format", "jsonv2"), ("limit", "1"), ("q", query)])
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		let Some(hit) = hits.into_iter().next() else {
			return Ok(None);
		};
		let lat = hit.lat.parse().map_err(|_| GeocodeError::BadCoordinates(hit.lat.clone()))?;
		let lng = hit.lon.parse().map_err(|_| GeocodeError::BadCoordinates(hit.lon.clone()))?;
		Ok(Some(Place {
			location: hit.display_name,
			lat,
			lng,
		}))
	}
}

#[derive(serde::Deserialize, Debug)]
pub struct ReverseParams {
	pub lat: f64,
	pub lng: f64,
}

pub async fn reverse_location(
	state: State<AppState>,
	params: Result<Query<ReverseParams>, QueryRejection>,
) -> ApiResult<Json<ResolvedLocation>> {
	let Query(params) = params?;
	validate_coordinates(params.lat, params.lng)?;
	Ok(Json(state.geocoder.reverse(params.lat, params.lng).await))
}

#[derive(serde::Deserialize, Debug)]
pub struct SearchParams {
	pub q: Option<String>,
}

pub async fn search_location(
	state: State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Place>> {
	let Query(params) = params?;
	let query = params.q.unwrap_or_default();
	let query = query.trim();
	if query.is_empty() {
		return Err(ApiError::Validation("q is required".to_owned()));
	}
	match state.geocoder.search(query).await {
		Ok(Some(place)) => Ok(Json(place)),
		Ok(None) => Err(ApiError::LocationNotFound(query.to_owned())),
		Err(e) => {
			log::warn!("location search for '{}' failed: {}", query, e);
			Err(ApiError::LocationNotFound(query.to_owned()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coordinate_label_uses_four_decimals() {
		assert_eq!(coordinate_label(40.7505, -73.9934), "40.7505, -73.9934");
		assert_eq!(coordinate_label(1.0, 2.123456), "1.0000, 2.1235");
	}

	#[test]
	fn coordinates_are_range_checked() {
		assert!(validate_coordinates(40.7, -73.9).is_ok());
		assert!(validate_coordinates(90.0, 180.0).is_ok());
		assert!(validate_coordinates(90.1, 0.0).is_err());
		assert!(validate_coordinates(0.0, -180.5).is_err());
		assert!(validate_coordinates(f64::NAN, 0.0).is_err());
	}

	#[tokio::test]
	async fn unreachable_service_falls_back_to_coordinates() {
		let geocoder = Geocoder::new("http://127.0.0.1:9", "test-agent", Duration::from_secs(2)).unwrap();
		let resolved = geocoder.reverse(40.7505, -73.9934).await;
		assert!(!resolved.resolved);
		assert_eq!(resolved.location, "40.7505, -73.9934");
	}

	#[test]
	fn trailing_slash_is_trimmed() {
		let geocoder = Geocoder::new("https://example.test/", "test-agent", Duration::from_secs(1)).unwrap();
		assert_eq!(geocoder.base_url, "https://example.test");
	}
}
