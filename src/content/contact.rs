use axum::{extract::rejection::JsonRejection, Json};

use crate::error::{ApiError, ApiResult};

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct ContactDetails {
	pub phones: [&'static str; 2],
	pub emails: [&'static str; 2],
	pub address: [&'static str; 2],
	pub business_hours: [&'static str; 3],
	pub headquarters: Coordinates,
}

pub const HEADQUARTERS: Coordinates = Coordinates { lat: 40.7505, lng: -73.9934 };

pub const CONTACT: ContactDetails = ContactDetails {
	phones: ["+1 (555) 123-4567", "+1 (555) 765-4321"],
	emails: ["info@carrental.com", "support@carrental.com"],
	address: ["123 Car Street", "New York, NY 10001"],
	business_hours: ["Monday - Friday: 9:00 AM - 6:00 PM", "Saturday: 10:00 AM - 4:00 PM", "Sunday: Closed"],
	headquarters: HEADQUARTERS,
};

pub async fn get_contact() -> Json<ContactDetails> {
	Json(CONTACT)
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

#[derive(serde::Serialize, Debug, PartialEq)]
pub struct ContactReceipt {
	pub status: &'static str,
	pub message: &'static str,
}

pub const RECEIVED: &str = "Thank you for your message! We'll get back to you soon.";

impl ContactMessage {
	pub fn validate(&self) -> ApiResult<()> {
		for (field, value) in [("name", &self.name), ("email", &self.email), ("subject", &self.subject), ("message", &self.message)] {
			if value.trim().is_empty() {
				return Err(ApiError::Validation(format!("{} is required", field)));
			}
		}
		if !looks_like_email(self.email.trim()) {
			return Err(ApiError::Validation(format!("'{}' is not a valid email address", self.email.trim())));
		}
		Ok(())
	}
}

fn looks_like_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& !email.contains(char::is_whitespace)
		&& domain.split('.').count() >= 2
		&& domain.split('.').all(|part| !part.is_empty())
}

/// Acknowledges the contact form. The message is logged, not stored.
pub async fn submit_contact(message: Result<Json<ContactMessage>, JsonRejection>) -> ApiResult<Json<ContactReceipt>> {
	let Json(message) = message?;
	message.validate()?;
	log::info!("contact message from {} <{}>: {}", message.name.trim(), message.email.trim(), message.subject.trim());
	Ok(Json(ContactReceipt {
		status: "received",
		message: RECEIVED,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
		ContactMessage {
			name: name.to_owned(),
			email: email.to_owned(),
			subject: subject.to_owned(),
			message: body.to_owned(),
		}
	}

	#[test]
	fn complete_message_is_accepted() {
		assert!(message("Ada", "ada@example.com", "Hi", "Do you rent vans?").validate().is_ok());
	}

	#[test]
	fn blank_fields_are_named() {
		match message("Ada", "ada@example.com", "   ", "body").validate() {
			Err(ApiError::Validation(msg)) => assert_eq!(msg, "subject is required"),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn malformed_emails_are_rejected() {
		for email in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com", "ada@example..com"] {
			assert!(message("Ada", email, "Hi", "body").validate().is_err(), "{} should be rejected", email);
		}
	}
}
