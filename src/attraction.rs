// Attractions and special events: entities rated directly by visitor feedback

use tracing::debug;

use crate::entity::{format_rating, mean_rating, EntityKind, TourEntity};
use crate::error::{require_non_empty, TourError};
use crate::feedback::Feedback;

#[derive(Debug, Clone)]
pub struct Attraction {
    name: String,
    description: String,
    location: String,
    operating_hours: String,
    rating: f64,
    feedback: Vec<Feedback>,
}

impl Attraction {
    pub fn new(
        name: &str,
        description: &str,
        location: &str,
        operating_hours: &str,
    ) -> Result<Self, TourError> {
        require_non_empty("name", name)?;
        require_non_empty("description", description)?;
        require_non_empty("location", location)?;
        require_non_empty("operating hours", operating_hours)?;

        debug!(name, "attraction created");
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            operating_hours: operating_hours.to_string(),
            rating: 0.0,
            feedback: Vec::new(),
        })
    }

    // Seeds a rating that is shown until the first feedback arrives
    pub fn with_rating(mut self, initial_rating: f64) -> Result<Self, TourError> {
        if !(0.0..=5.0).contains(&initial_rating) {
            return Err(TourError::InvalidInput(format!(
                "initial rating {} is outside 0.0-5.0",
                initial_rating
            )));
        }
        self.rating = initial_rating;
        Ok(self)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn operating_hours(&self) -> &str {
        &self.operating_hours
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    fn push_feedback(&mut self, feedback: Feedback) {
        self.feedback.push(feedback);
        // Recomputed from every record so the mean never drifts
        self.rating = mean_rating(self.feedback.iter().map(|f| f64::from(f.rating())));
        debug!(
            name = %self.name,
            rating = self.rating,
            feedback_count = self.feedback.len(),
            "attraction rating updated"
        );
    }
}

impl TourEntity for Attraction {
    fn name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Attraction
    }

    fn update_rating(&mut self, new_rating: i32) -> Result<(), TourError> {
        let feedback = Feedback::anonymous(new_rating)?;
        self.push_feedback(feedback);
        Ok(())
    }

    fn record_feedback(&mut self, feedback: Feedback) -> Result<(), TourError> {
        self.push_feedback(feedback);
        Ok(())
    }

    fn display_info(&self) -> String {
        format!(
            "Attraction Name: {}\nDescription: {}\nLocation: {}\nOperating Hours: {}\nRating: {}",
            self.name,
            self.description,
            self.location,
            self.operating_hours,
            format_rating(self.rating)
        )
    }
}

impl Drop for Attraction {
    fn drop(&mut self) {
        debug!(name = %self.name, "attraction released");
    }
}

/// A time-boxed attraction. Everything except the dates is delegated to the
/// wrapped [`Attraction`].
#[derive(Debug, Clone)]
pub struct SpecialEvent {
    attraction: Attraction,
    start_date: String,
    end_date: String,
}

impl SpecialEvent {
    pub fn new(attraction: Attraction, start_date: &str, end_date: &str) -> Result<Self, TourError> {
        require_non_empty("start date", start_date)?;
        require_non_empty("end date", end_date)?;

        debug!(name = %attraction.name, start_date, end_date, "special event created");
        Ok(Self {
            attraction,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }

    pub fn attraction(&self) -> &Attraction {
        &self.attraction
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }
}

impl TourEntity for SpecialEvent {
    fn name(&self) -> &str {
        self.attraction.name()
    }

    fn rating(&self) -> f64 {
        self.attraction.rating()
    }

    fn kind(&self) -> EntityKind {
        EntityKind::SpecialEvent
    }

    fn update_rating(&mut self, new_rating: i32) -> Result<(), TourError> {
        self.attraction.update_rating(new_rating)
    }

    fn record_feedback(&mut self, feedback: Feedback) -> Result<(), TourError> {
        self.attraction.record_feedback(feedback)
    }

    fn display_info(&self) -> String {
        format!(
            "{}\nStart Date: {}\nEnd Date: {}",
            self.attraction.display_info(),
            self.start_date,
            self.end_date
        )
    }
}
