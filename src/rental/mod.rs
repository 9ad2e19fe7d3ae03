pub mod booking;

pub use booking::{book, BookingConfirmation, RentalDraft, RentalRequest, RentalWindow};
