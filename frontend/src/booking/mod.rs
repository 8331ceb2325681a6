//! Booking form domain: the draft, its validation rules, the five-step
//! navigator and the summary message handed off to WhatsApp.

pub mod draft;
pub mod fields;
pub mod navigator;
pub mod summary;
pub mod validation;

pub use draft::Field;
pub use fields::{AcType, Area, Service, TimeSlot};
pub use navigator::{BookingFlow, Phase, Step};
