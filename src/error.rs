use axum::{
	extract::rejection::{JsonRejection, QueryRejection},
	response::{IntoResponse, Response},
	Json,
};
use hyper::StatusCode;
use serde_json::json;

/// Errors a handler can hand back to the client.
///
/// Every variant renders as `{"error": <message>, "code": <CODE>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("car {0} not found")]
	CarNotFound(String),

	#[error("Drop-off date must be after pickup date!")]
	InvalidDateRange,

	#[error("{0}")]
	Validation(String),

	#[error("invalid filter: {0}")]
	InvalidFilter(String),

	#[error("coordinates out of range: lat={lat}, lng={lng}")]
	InvalidCoordinates { lat: f64, lng: f64 },

	#[error("no location matches '{0}'")]
	LocationNotFound(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::CarNotFound(_) | ApiError::LocationNotFound(_) => StatusCode::NOT_FOUND,
			ApiError::InvalidDateRange => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::Validation(_) | ApiError::InvalidFilter(_) | ApiError::InvalidCoordinates { .. } => StatusCode::BAD_REQUEST,
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			ApiError::CarNotFound(_) => "CAR_NOT_FOUND",
			ApiError::InvalidDateRange => "INVALID_DATE_RANGE",
			ApiError::Validation(_) => "VALIDATION_ERROR",
			ApiError::InvalidFilter(_) => "INVALID_FILTER",
			ApiError::InvalidCoordinates { .. } => "INVALID_COORDINATES",
			ApiError::LocationNotFound(_) => "LOCATION_NOT_FOUND",
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		ApiError::Validation(rejection.body_text())
	}
}

impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		ApiError::Validation(rejection.body_text())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = json!({
			"error": self.to_string(),
			"code": self.code(),
		});
		(self.status(), Json(body)).into_response()
	}
}
