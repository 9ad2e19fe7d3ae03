pub mod geocoder;
pub mod slot;

pub use geocoder::{coordinate_label, Geocoder, Place, ResolvedLocation};
pub use slot::{LocationSlot, LookupTicket};
