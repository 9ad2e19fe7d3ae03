use std::sync::Arc;

use axum::{
	extract::State,
	routing::{get, post},
	Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

pub mod cars;
pub mod config;
pub mod content;
pub mod encryption_engine;
pub mod error;
pub mod location;
pub mod rental;
pub mod review;
pub mod search;

use cars::Fleet;
use location::Geocoder;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub fleet: Arc<Fleet>,
	pub geocoder: Arc<Geocoder>,
}

impl AppState {
	pub fn new(fleet: Fleet, geocoder: Geocoder) -> Self {
		AppState {
			fleet: Arc::new(fleet),
			geocoder: Arc::new(geocoder),
		}
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/cars", get(cars::get_cars))
		.route("/cars/filters", get(search::get_filter_options))
		.route("/cars/search", get(search::search))
		.route("/cars/:id", get(cars::car_detail))
		.route("/cars/:id/book", post(rental::book))
		.route("/location/reverse", get(location::geocoder::reverse_location))
		.route("/location/search", get(location::geocoder::search_location))
		.route("/services", get(content::get_services))
		.route("/testimonials", get(review::get_testimonials))
		.route("/faq", get(content::get_faq))
		.route("/contact", get(content::get_contact).post(content::submit_contact))
		.layer(CorsLayer::permissive())
		.with_state(state)
}

async fn health(state: State<AppState>) -> Json<Value> {
	Json(json!({
		"status": "ok",
		"version": env!("CARGO_PKG_VERSION"),
		"fleet_size": state.fleet.len(),
	}))
}
