//! Static marketing copy behind the services, FAQ and contact pages.

pub mod contact;
pub mod faq;
pub mod services;

pub use contact::{get_contact, submit_contact, ContactMessage};
pub use faq::get_faq;
pub use services::get_services;
