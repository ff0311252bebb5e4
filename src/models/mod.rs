//! Data models for the travel journal.

mod travel;

pub use travel::{NewTravel, TravelEntry, TravelKind};
