use serde::{Deserialize, Serialize};

use crate::entity::validate_rating;
use crate::error::TourError;

// A single visitor rating; the comment never affects computed ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFeedback")]
pub struct Feedback {
    visitor: Option<String>,
    rating: u8,
    comment: String,
}

// Unchecked wire shape; converted through validate_rating on deserialization
#[derive(Deserialize)]
struct RawFeedback {
    #[serde(default)]
    visitor: Option<String>,
    rating: i32,
    #[serde(default)]
    comment: String,
}

impl TryFrom<RawFeedback> for Feedback {
    type Error = TourError;

    fn try_from(raw: RawFeedback) -> Result<Self, Self::Error> {
        Ok(Self {
            visitor: raw.visitor,
            rating: validate_rating(raw.rating)?,
            comment: raw.comment,
        })
    }
}

impl Feedback {
    pub fn new(visitor: &str, rating: i32, comment: &str) -> Result<Self, TourError> {
        Ok(Self {
            visitor: Some(visitor.to_string()),
            rating: validate_rating(rating)?,
            comment: comment.to_string(),
        })
    }

    // Rating without a known visitor, as recorded by update_rating
    pub fn anonymous(rating: i32) -> Result<Self, TourError> {
        Ok(Self {
            visitor: None,
            rating: validate_rating(rating)?,
            comment: String::new(),
        })
    }

    pub fn visitor(&self) -> Option<&str> {
        self.visitor.as_deref()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}
