use base64::{
	alphabet,
	engine::{self, general_purpose},
	Engine,
};
use chrono::{DateTime, Local, NaiveDateTime};

pub const CUSTOM_ENGINE: engine::GeneralPurpose = engine::GeneralPurpose::new(&alphabet::URL_SAFE, general_purpose::NO_PAD);

/// Reference handed back with an accepted booking. Not stored anywhere.
pub fn confirmation_code(car_id: u32, pick_up: &NaiveDateTime, issued_at: &DateTime<Local>) -> String {
	let input = format!("{}-{}-{}", car_id, pick_up.format("%Y%m%d%H%M"), issued_at.format("%Y%m%d%H%M%S%3f"));
	CUSTOM_ENGINE.encode(input)
}
