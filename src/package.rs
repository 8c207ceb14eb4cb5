// Tour packages: named, priced bundles whose rating is derived from their attractions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attraction::Attraction;
use crate::entity::{format_rating, mean_rating, EntityKind, TourEntity};
use crate::error::{require_non_empty, TourError};
use crate::feedback::Feedback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

impl Price {
    pub fn new(amount: f64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// A tour package owns its attractions outright; dropping the package drops
/// every attraction in it.
///
/// Member attractions can only be changed through the package, so the cached
/// aggregate stays equal to the mean of their current ratings.
#[derive(Debug, Clone)]
pub struct TourPackage {
    name: String,
    price: Price,
    rating: f64,
    attractions: Vec<Attraction>,
}

impl TourPackage {
    pub fn new(name: &str, price: Price) -> Result<Self, TourError> {
        require_non_empty("package name", name)?;

        debug!(name, amount = price.amount, currency = %price.currency, "tour package created");
        Ok(Self {
            name: name.to_string(),
            price,
            rating: 0.0,
            attractions: Vec::new(),
        })
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    // Member names identify attractions within a package, so they must be unique
    pub fn add_attraction(&mut self, attraction: Attraction) -> Result<(), TourError> {
        if self.attraction(attraction.name()).is_some() {
            return Err(TourError::InvalidInput(format!(
                "package '{}' already has an attraction named '{}'",
                self.name,
                attraction.name()
            )));
        }
        debug!(package = %self.name, attraction = attraction.name(), "attraction added to package");
        self.attractions.push(attraction);
        self.refresh_rating();
        Ok(())
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn attraction(&self, name: &str) -> Option<&Attraction> {
        self.attractions.iter().find(|a| a.name() == name)
    }

    // Routes a rating to one member attraction, then refreshes the package aggregate
    pub fn rate_attraction(&mut self, name: &str, rating: i32) -> Result<(), TourError> {
        self.with_member(name, |attraction| attraction.update_rating(rating))
    }

    pub fn record_attraction_feedback(
        &mut self,
        name: &str,
        feedback: Feedback,
    ) -> Result<(), TourError> {
        self.with_member(name, |attraction| attraction.record_feedback(feedback))
    }

    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    fn with_member<F>(&mut self, name: &str, f: F) -> Result<(), TourError>
    where
        F: FnOnce(&mut Attraction) -> Result<(), TourError>,
    {
        let Some(attraction) = self.attractions.iter_mut().find(|a| a.name() == name) else {
            return Err(TourError::InvalidInput(format!(
                "package '{}' has no attraction named '{}'",
                self.name, name
            )));
        };
        f(attraction)?;
        self.refresh_rating();
        Ok(())
    }

    // An empty package rates 0.0
    fn refresh_rating(&mut self) {
        self.rating = mean_rating(self.attractions.iter().map(|a| a.rating()));
    }
}

impl TourEntity for TourPackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn kind(&self) -> EntityKind {
        EntityKind::TourPackage
    }

    // Packages have no feedback of their own; the argument is ignored
    fn update_rating(&mut self, _new_rating: i32) -> Result<(), TourError> {
        self.refresh_rating();
        debug!(name = %self.name, rating = self.rating, "package rating recomputed");
        Ok(())
    }

    fn record_feedback(&mut self, _feedback: Feedback) -> Result<(), TourError> {
        self.refresh_rating();
        Ok(())
    }

    fn rate_member(&mut self, member: &str, rating: i32) -> Result<(), TourError> {
        self.rate_attraction(member, rating)
    }

    fn display_info(&self) -> String {
        let mut info = format!(
            "Tour Package: {}\nPrice: {:.2} {}\nIncluded Attractions: {}",
            self.name,
            self.price.amount,
            self.price.currency,
            self.attractions.len()
        );
        for attraction in &self.attractions {
            info.push_str(&format!(
                "\n  - {} ({})",
                attraction.name(),
                format_rating(attraction.rating())
            ));
        }
        info.push_str(&format!("\nRating: {}", format_rating(self.rating)));
        info
    }
}

impl Drop for TourPackage {
    fn drop(&mut self) {
        debug!(
            name = %self.name,
            attractions = self.attractions.len(),
            "tour package released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    fn attraction(name: &str) -> Attraction {
        Attraction::new(name, "Sightseeing stop.", "Somewhere", "9 AM - 5 PM").unwrap()
    }

    fn rated(name: &str, ratings: &[i32]) -> Attraction {
        let mut a = attraction(name);
        for r in ratings {
            a.update_rating(*r).unwrap();
        }
        a
    }

    fn package() -> TourPackage {
        TourPackage::new("Southwest Explorer", Price::new(499.99, "USD")).unwrap()
    }

    #[test]
    fn test_package_rating_is_mean_of_members() {
        let mut package = package();
        package.add_attraction(rated("Grand Canyon", &[4])).unwrap();
        package.add_attraction(rated("Hoover Dam", &[5])).unwrap();

        package.update_rating(1).unwrap();
        assert_eq!(package.rating(), 4.5);
        assert_eq!(package.len(), 2);
    }

    #[test]
    fn test_update_rating_ignores_argument() {
        let mut package = package();
        package.add_attraction(rated("Grand Canyon", &[5, 4, 5])).unwrap();

        package.update_rating(1).unwrap();
        assert!((package.rating() - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(package.attraction("Grand Canyon").unwrap().feedback().len(), 3);
    }

    #[test]
    fn test_empty_package_rates_zero() {
        let mut package = package();
        assert!(package.is_empty());
        assert!(package.update_rating(3).is_ok());
        assert_eq!(package.rating(), 0.0);
    }

    #[test]
    fn test_rate_attraction_refreshes_aggregate() {
        let mut package = package();
        package.add_attraction(attraction("Grand Canyon")).unwrap();
        package.add_attraction(attraction("Hoover Dam")).unwrap();

        package.rate_attraction("Grand Canyon", 4).unwrap();
        assert_eq!(package.rating(), 2.0);

        package.rate_attraction("Hoover Dam", 5).unwrap();
        assert_eq!(package.rating(), 4.5);

        let feedback = Feedback::new("Alice Johnson", 3, "Windy").unwrap();
        package
            .record_attraction_feedback("Hoover Dam", feedback)
            .unwrap();
        assert_eq!(package.attraction("Hoover Dam").unwrap().rating(), 4.0);
        assert_eq!(package.rating(), 4.0);
    }

    #[test]
    fn test_rate_unknown_attraction_fails() {
        let mut package = package();
        let result = package.rate_attraction("Area 51", 5);
        assert!(matches!(result, Err(TourError::InvalidInput(_))));
    }

    #[test]
    fn test_package_requires_name() {
        let result = TourPackage::new(" ", Price::new(10.0, "USD"));
        assert!(matches!(result, Err(TourError::InvalidInput(_))));
    }

    #[test]
    fn test_display_info_lists_members() {
        let mut package = package();
        package.add_attraction(rated("Grand Canyon", &[4])).unwrap();
        package.add_attraction(rated("Hoover Dam", &[5])).unwrap();

        let info = package.display_info();
        assert!(info.starts_with("Tour Package: Southwest Explorer"));
        assert!(info.contains("Price: 499.99 USD"));
        assert!(info.contains("Included Attractions: 2"));
        assert!(info.contains("  - Grand Canyon (4.0/5)"));
        assert!(info.ends_with("Rating: 4.5/5"));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let mut package = package();
        package.add_attraction(rated("Grand Canyon", &[5])).unwrap();

        let result = package.add_attraction(rated("Grand Canyon", &[1]));
        assert!(matches!(result, Err(TourError::InvalidInput(_))));
        assert_eq!(package.len(), 1);
        assert_eq!(package.rating(), 5.0);
    }

    #[test]
    fn test_record_feedback_refreshes_from_members() {
        let mut package = package();
        package.add_attraction(rated("Grand Canyon", &[4])).unwrap();
        package.add_attraction(rated("Hoover Dam", &[5])).unwrap();

        let feedback = Feedback::new("Alice Johnson", 1, "Bus was late").unwrap();
        package.record_feedback(feedback).unwrap();
        assert_eq!(package.rating(), 4.5);
        assert!(package.attractions().iter().all(|a| a.feedback().len() == 1));
    }

    #[test]
    fn test_rate_member_through_trait_object() {
        let mut package = package();
        package.add_attraction(attraction("Grand Canyon")).unwrap();
        let mut boxed: Box<dyn TourEntity> = Box::new(package);

        boxed.rate_member("Grand Canyon", 3).unwrap();
        assert_eq!(boxed.rating(), 3.0);
    }

    #[test]
    fn test_dropping_package_releases_attractions() {
        let mut package = package();
        package.add_attraction(attraction("Grand Canyon")).unwrap();
        package.add_attraction(attraction("Hoover Dam")).unwrap();

        let log = capture_logs(|| drop(package));
        assert_eq!(log.matches("attraction released").count(), 2);
        assert!(log.contains("Grand Canyon"));
        assert!(log.contains("Hoover Dam"));
        assert_eq!(log.matches("tour package released").count(), 1);
    }
}
