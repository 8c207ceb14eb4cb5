use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::entity::EntityId;
use crate::error::{require_non_empty, TourError};
use crate::feedback::Feedback;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    name: String,
    email: String,
}

impl UserProfile {
    pub fn new(name: &str, email: &str) -> Result<Self, TourError> {
        require_non_empty("user name", name)?;
        require_non_empty("email", email)?;

        debug!(name, "user profile created");
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_profile(&self) -> String {
        format!("User Profile: {} ({})", self.name, self.email)
    }

    // Signs the feedback with this user's name; returns the entity's new rating
    pub fn leave_feedback(
        &self,
        catalog: &mut Catalog,
        entity_id: EntityId,
        rating: i32,
        comment: &str,
    ) -> Result<f64, TourError> {
        let feedback = Feedback::new(&self.name, rating, comment)?;
        catalog.submit_feedback(entity_id, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attraction::Attraction;
    use crate::attraction::SpecialEvent;

    fn alice() -> UserProfile {
        UserProfile::new("Alice Johnson", "alice@example.com").unwrap()
    }

    #[test]
    fn test_display_profile() {
        assert_eq!(
            alice().display_profile(),
            "User Profile: Alice Johnson (alice@example.com)"
        );
    }

    #[test]
    fn test_profile_requires_name_and_email() {
        assert!(matches!(
            UserProfile::new("", "alice@example.com"),
            Err(TourError::InvalidInput(_))
        ));
        assert!(matches!(
            UserProfile::new("Alice Johnson", ""),
            Err(TourError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_leave_feedback_is_signed() {
        let mut catalog = Catalog::new();
        let attraction =
            Attraction::new("Jazz Night", "Live jazz.", "Riverside Hall", "8 PM - 11 PM").unwrap();
        let id = catalog.insert(SpecialEvent::new(attraction, "2025-07-04", "2025-07-04").unwrap());

        let rating = alice().leave_feedback(&mut catalog, id, 4, "Great band").unwrap();
        assert_eq!(rating, 4.0);

        let rating = alice().leave_feedback(&mut catalog, id, 5, "Even better").unwrap();
        assert_eq!(rating, 4.5);
    }

    #[test]
    fn test_leave_feedback_rejects_bad_rating() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Attraction::new("Grand Canyon", "Canyon.", "Arizona, USA", "6 AM - 6 PM").unwrap(),
        );

        assert_eq!(
            alice().leave_feedback(&mut catalog, id, 6, "Off the charts"),
            Err(TourError::InvalidRating(6))
        );
        assert_eq!(catalog.get(id).unwrap().rating(), 0.0);
    }
}
