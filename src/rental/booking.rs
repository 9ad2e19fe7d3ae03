use axum::{
	extract::{rejection::JsonRejection, Path, State},
	Json,
};
use chrono::{Local, NaiveDateTime};

use crate::{
	cars::Car,
	encryption_engine::confirmation_code,
	error::{ApiError, ApiResult},
	location::LocationSlot,
	AppState,
};

pub const PICK_UP_DATE: &str = "pickUpDate";
pub const DROP_OFF_DATE: &str = "dropOffDate";
pub const LOCATION: &str = "location";

pub const CONFIRMED: &str = "Booking confirmed!";

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";
const DATETIME_LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a `datetime-local` form value. Seconds are optional, there is no zone.
pub fn parse_datetime_local(raw: &str) -> Option<NaiveDateTime> {
	let raw = raw.trim();
	NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL)
		.or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_SECONDS))
		.ok()
}

/// Booking form as submitted. Missing fields arrive as empty strings and are
/// reported by [`RentalRequest::validate`].
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalRequest {
	pub pick_up_date: String,
	pub drop_off_date: String,
	pub location: String,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalWindow {
	pub pick_up: NaiveDateTime,
	pub drop_off: NaiveDateTime,
	pub location: String,
}

impl RentalRequest {
	pub fn validate(&self) -> ApiResult<RentalWindow> {
		let pick_up = required_datetime(PICK_UP_DATE, &self.pick_up_date)?;
		let drop_off = required_datetime(DROP_OFF_DATE, &self.drop_off_date)?;
		let location = self.location.trim();
		if location.is_empty() {
			return Err(ApiError::Validation(format!("{} is required", LOCATION)));
		}
		if drop_off <= pick_up {
			return Err(ApiError::InvalidDateRange);
		}
		Ok(RentalWindow {
			pick_up,
			drop_off,
			location: location.to_owned(),
		})
	}
}

fn required_datetime(field: &str, raw: &str) -> ApiResult<NaiveDateTime> {
	if raw.trim().is_empty() {
		return Err(ApiError::Validation(format!("{} is required", field)));
	}
	parse_datetime_local(raw).ok_or_else(|| ApiError::Validation(format!("{} '{}' is not a valid date and time", field, raw)))
}

impl RentalWindow {
	/// Billable days: partial days round up, never less than one.
	pub fn rental_days(&self) -> i64 {
		let seconds = (self.drop_off - self.pick_up).num_seconds();
		((seconds + 86_399) / 86_400).max(1)
	}
}

/// The booking form while it is being filled in, held by the client.
///
/// No route keeps drafts; a client submits [`RentalDraft::to_request`] as the
/// body of `POST /cars/:id/book`.
#[derive(Debug, Clone, Default)]
pub struct RentalDraft {
	pick_up_date: String,
	drop_off_date: String,
	location: LocationSlot,
}

impl RentalDraft {
	pub fn new() -> Self {
		RentalDraft::default()
	}

	/// Updates one field by its form name.
	pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> ApiResult<()> {
		match name {
			PICK_UP_DATE => self.pick_up_date = value.into(),
			DROP_OFF_DATE => self.drop_off_date = value.into(),
			LOCATION => self.location.set(value),
			other => return Err(ApiError::Validation(format!("unknown booking field '{}'", other))),
		}
		Ok(())
	}

	/// The location field, for map pickers that resolve it asynchronously.
	pub fn location_mut(&mut self) -> &mut LocationSlot {
		&mut self.location
	}

	pub fn location(&self) -> &str {
		self.location.text()
	}

	pub fn to_request(&self) -> RentalRequest {
		RentalRequest {
			pick_up_date: self.pick_up_date.clone(),
			drop_off_date: self.drop_off_date.clone(),
			location: self.location.text().to_owned(),
		}
	}

	/// Consumes the draft. Nothing is kept whether or not it validates.
	pub fn submit(self) -> ApiResult<RentalWindow> {
		self.to_request().validate()
	}
}

#[derive(serde::Serialize, Debug)]
pub struct BookingConfirmation {
	pub status: &'static str,
	pub message: &'static str,
	pub confirmation_code: String,
	pub car: Car,
	pub pick_up_date: String,
	pub drop_off_date: String,
	pub location: String,
	pub rental_days: i64,
	pub estimated_total: u64,
}

impl BookingConfirmation {
	pub fn new(car: &Car, window: RentalWindow) -> Self {
		let rental_days = window.rental_days();
		BookingConfirmation {
			status: "confirmed",
			message: CONFIRMED,
			confirmation_code: confirmation_code(car.id, &window.pick_up, &Local::now()),
			car: car.clone(),
			pick_up_date: window.pick_up.format(DATETIME_LOCAL).to_string(),
			drop_off_date: window.drop_off.format(DATETIME_LOCAL).to_string(),
			location: window.location,
			rental_days,
			estimated_total: u64::from(car.price) * rental_days.unsigned_abs(),
		}
	}
}

pub async fn book(
	state: State<AppState>,
	Path(id): Path<String>,
	request: Result<Json<RentalRequest>, JsonRejection>,
) -> ApiResult<Json<BookingConfirmation>> {
	let Some(car) = state.fleet.resolve_param(&id) else {
		return Err(ApiError::CarNotFound(id));
	};
	let Json(request) = request?;
	let window = match request.validate() {
		Ok(window) => window,
		Err(e) => {
			log::info!("booking for car {} rejected: {}", car.id, e);
			return Err(e);
		}
	};
	let confirmation = BookingConfirmation::new(car, window);
	log::info!(
		"booking confirmed for {} ({} days from {} at {}), ref {}",
		car.name,
		confirmation.rental_days,
		confirmation.pick_up_date,
		confirmation.location,
		confirmation.confirmation_code
	);
	Ok(Json(confirmation))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cars::Fleet;

	fn request(pick_up: &str, drop_off: &str, location: &str) -> RentalRequest {
		RentalRequest {
			pick_up_date: pick_up.to_owned(),
			drop_off_date: drop_off.to_owned(),
			location: location.to_owned(),
		}
	}

	#[test]
	fn drop_off_before_pick_up_is_rejected() {
		let err = request("2025-01-01T10:00", "2025-01-01T09:00", "Airport").validate().unwrap_err();
		assert!(matches!(err, ApiError::InvalidDateRange));
	}

	#[test]
	fn drop_off_after_pick_up_is_accepted() {
		let window = request("2025-01-01T10:00", "2025-01-01T11:00", "Airport").validate().unwrap();
		assert_eq!(window.location, "Airport");
		assert_eq!(window.rental_days(), 1);
	}

	#[test]
	fn equal_timestamps_are_rejected() {
		let err = request("2025-01-01T10:00", "2025-01-01T10:00", "Airport").validate().unwrap_err();
		assert!(matches!(err, ApiError::InvalidDateRange));
	}

	#[test]
	fn comparison_is_chronological_not_lexical() {
		assert!(request("2025-01-01T10:00", "2025-01-01T10:00:30", "Airport").validate().is_ok());
		assert!(request(" 2025-01-01T10:00 ", "2025-01-02T09:00", "Airport").validate().is_ok());
	}

	#[test]
	fn every_field_is_required() {
		for (req, field) in [
			(request("", "2025-01-01T11:00", "Airport"), PICK_UP_DATE),
			(request("2025-01-01T10:00", "  ", "Airport"), DROP_OFF_DATE),
			(request("2025-01-01T10:00", "2025-01-01T11:00", ""), LOCATION),
		] {
			match req.validate() {
				Err(ApiError::Validation(msg)) => assert_eq!(msg, format!("{} is required", field)),
				other => panic!("expected validation error for {}, got {:?}", field, other),
			}
		}
	}

	#[test]
	fn garbage_dates_are_validation_errors() {
		let err = request("tomorrow", "2025-01-01T11:00", "Airport").validate().unwrap_err();
		assert!(matches!(err, ApiError::Validation(_)));
	}

	#[test]
	fn rental_days_round_up() {
		let days = |a: &str, b: &str| request(a, b, "x").validate().unwrap().rental_days();
		assert_eq!(days("2025-01-01T10:00", "2025-01-02T10:00"), 1);
		assert_eq!(days("2025-01-01T10:00", "2025-01-02T10:01"), 2);
		assert_eq!(days("2025-01-01T10:00", "2025-01-04T09:00"), 3);
	}

	#[test]
	fn draft_is_filled_field_by_field() {
		let mut draft = RentalDraft::new();
		draft.set_field(PICK_UP_DATE, "2025-01-01T10:00").unwrap();
		draft.set_field(DROP_OFF_DATE, "2025-01-03T10:00").unwrap();
		draft.set_field(LOCATION, "Airport Terminal 1").unwrap();
		draft.set_field(LOCATION, "Downtown Office").unwrap();
		assert!(draft.set_field("promoCode", "SUMMER").is_err());

		assert_eq!(draft.location(), "Downtown Office");
		let window = draft.submit().unwrap();
		assert_eq!(window.rental_days(), 2);
	}

	#[test]
	fn draft_location_takes_the_newest_lookup() {
		let mut draft = RentalDraft::new();
		let stale = draft.location_mut().begin_lookup();
		let fresh = draft.location_mut().begin_lookup();
		assert!(draft.location_mut().complete(fresh, "Penn Station"));
		assert!(!draft.location_mut().complete(stale, "40.7505, -73.9934"));
		assert_eq!(draft.to_request().location, "Penn Station");
	}

	#[test]
	fn confirmation_prices_the_window() {
		let fleet = Fleet::embedded().unwrap();
		let car = fleet.resolve(1).unwrap();
		let window = request("2025-01-01T10:00", "2025-01-03T12:00", "Airport").validate().unwrap();
		let confirmation = BookingConfirmation::new(car, window);

		assert_eq!(confirmation.message, "Booking confirmed!");
		assert_eq!(confirmation.rental_days, 3);
		assert_eq!(confirmation.estimated_total, 267);
		assert_eq!(confirmation.pick_up_date, "2025-01-01T10:00");
		assert!(!confirmation.confirmation_code.is_empty());
	}

	#[test]
	fn request_reads_form_field_names() {
		let req: RentalRequest = serde_json::from_str(r#"{"pickUpDate":"2025-01-01T10:00","location":"Airport"}"#).unwrap();
		assert_eq!(req.pick_up_date, "2025-01-01T10:00");
		assert_eq!(req.drop_off_date, "");
	}
}
