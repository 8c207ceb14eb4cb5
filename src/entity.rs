// Shared contract for everything a visitor can rate or book

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TourError;
use crate::feedback::Feedback;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

// Handle used to refer to an entity owned by a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Attraction,
    SpecialEvent,
    TourPackage,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Attraction => "Attraction",
            EntityKind::SpecialEvent => "Special Event",
            EntityKind::TourPackage => "Tour Package",
        };
        f.write_str(label)
    }
}

// Serializable view of an entity, used for listings and JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub kind: EntityKind,
    pub rating: f64,
}

/// Capability set shared by attractions, special events and tour packages.
///
/// Ratings are always derived: attractions average their own feedback,
/// packages average their member attractions.
pub trait TourEntity: fmt::Debug {
    fn name(&self) -> &str;

    fn rating(&self) -> f64;

    fn kind(&self) -> EntityKind;

    // Feed a new 1-5 rating into the entity and recompute its aggregate
    fn update_rating(&mut self, new_rating: i32) -> Result<(), TourError>;

    // Same as update_rating, but keeps visitor and comment where the entity stores them
    fn record_feedback(&mut self, feedback: Feedback) -> Result<(), TourError> {
        self.update_rating(i32::from(feedback.rating()))
    }

    // Rates a named member of a composite entity; entities without members reject it
    fn rate_member(&mut self, member: &str, _rating: i32) -> Result<(), TourError> {
        Err(TourError::InvalidInput(format!(
            "{} '{}' has no member named '{}'",
            self.kind(),
            self.name(),
            member
        )))
    }

    fn display_info(&self) -> String;

    fn summary(&self) -> EntitySummary {
        EntitySummary {
            name: self.name().to_string(),
            kind: self.kind(),
            rating: self.rating(),
        }
    }
}

pub fn validate_rating(rating: i32) -> Result<u8, TourError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        tracing::warn!(rating, "rejected out-of-range rating");
        return Err(TourError::InvalidRating(rating));
    }
    Ok(rating as u8)
}

// Arithmetic mean, 0.0 for an empty input
pub fn mean_rating<I>(ratings: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}/{}", rating, MAX_RATING)
}
