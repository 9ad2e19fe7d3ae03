#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use axum::{
	body::{to_bytes, Body},
	extract::Query,
	http::{header::CONTENT_TYPE, Method, Request, StatusCode},
	response::{IntoResponse, Response},
	routing,
	Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use car_rental_server::{cars::Fleet, location::Geocoder, router, AppState};

/// Nothing listens on the discard port, so geocoding fails fast.
pub const UNREACHABLE_GEOCODER: &str = "http://127.0.0.1:9";

pub fn build_app(geocoder_url: &str) -> Router {
	let fleet = Fleet::embedded().expect("embedded fleet");
	let geocoder = Geocoder::new(geocoder_url, "car-rental-tests", Duration::from_secs(5)).expect("geocoder client");
	router(AppState::new(fleet, geocoder))
}

pub fn test_app() -> Router {
	build_app(UNREACHABLE_GEOCODER)
}

pub async fn get(app: Router, uri: &str) -> Response {
	app.oneshot(Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
	app.oneshot(
		Request::builder()
			.method(Method::POST)
			.uri(uri)
			.header(CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
	)
	.await
	.unwrap()
}

/// POST with an arbitrary body and, optionally, no content type at all.
pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
	let mut request = Request::builder().method(Method::POST).uri(uri);
	if let Some(content_type) = content_type {
		request = request.header(CONTENT_TYPE, content_type);
	}
	app.oneshot(request.body(Body::from(body.to_owned())).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

/// A tiny stand-in for the geocoding service, bound to an ephemeral port.
///
/// `/reverse` answers with a place name, except lat 0 (HTTP 500) and negative
/// lat (a reply without `display_name`). `/search` only knows "penn station".
pub async fn spawn_geocoder_stub() -> String {
	let app = Router::new()
		.route("/reverse", routing::get(stub_reverse))
		.route("/search", routing::get(stub_search));
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	format!("http://{}", addr)
}

async fn stub_reverse(Query(params): Query<HashMap<String, String>>) -> Response {
	let lat: f64 = params.get("lat").and_then(|v| v.parse().ok()).unwrap_or_default();
	if lat == 0.0 {
		return StatusCode::INTERNAL_SERVER_ERROR.into_response();
	}
	if lat < 0.0 {
		return Json(json!({ "error": "Unable to geocode" })).into_response();
	}
	Json(json!({ "display_name": "Penn Station, 8th Avenue, Manhattan, New York" })).into_response()
}

async fn stub_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
	match params.get("q").map(|q| q.to_lowercase()) {
		Some(q) if q == "penn station" => Json(json!([
			{ "display_name": "Penn Station, 8th Avenue, Manhattan, New York", "lat": "40.7506", "lon": "-73.9935" }
		])),
		_ => Json(json!([])),
	}
}
