// Tourism domain model: attractions, events and packages sharing one rating contract

pub mod attraction;
pub mod booking;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod feedback;
pub mod package;
pub mod profile;

#[cfg(test)]
mod test_support;

// Re-export key types for convenience
pub use attraction::{Attraction, SpecialEvent};
pub use booking::{Booking, BookingConfig, BookingCounter, BookingManager, BookingStatus};
pub use catalog::Catalog;
pub use entity::{
    format_rating, mean_rating, EntityId, EntityKind, EntitySummary, TourEntity, MAX_RATING,
    MIN_RATING,
};
pub use error::TourError;
pub use feedback::Feedback;
pub use package::{Price, TourPackage};
pub use profile::UserProfile;
