// Bookings: a visitor, a date and a status attached to a catalog entity by id

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::entity::EntityId;
use crate::error::{require_non_empty, TourError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

// Booking manager configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub id_prefix: String,
    pub default_status: BookingStatus,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            id_prefix: "BK".to_string(),
            default_status: BookingStatus::Pending,
        }
    }
}

impl BookingConfig {
    pub fn from_json(json: &str) -> Result<Self, TourError> {
        let config: BookingConfig =
            serde_json::from_str(json).map_err(|e| TourError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TourError> {
        if self.id_prefix.trim().is_empty() {
            return Err(TourError::ConfigError(
                "id_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Running total of bookings ever issued. It only goes up: cancelling or
/// dropping a booking leaves it untouched.
#[derive(Debug, Default)]
pub struct BookingCounter {
    total: AtomicUsize,
}

impl BookingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns the new total
    pub fn increment(&self) -> usize {
        self.total.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: String,
    visitor: String,
    entity_id: EntityId,
    date: String,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl Booking {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn visitor(&self) -> &str {
        &self.visitor
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_status(&mut self, status: BookingStatus) {
        debug!(id = %self.id, from = %self.status, to = %status, "booking status changed");
        self.status = status;
    }

    pub fn confirm(&mut self) {
        self.set_status(BookingStatus::Confirmed);
    }

    pub fn cancel(&mut self) {
        self.set_status(BookingStatus::Cancelled);
    }

    // The entity is looked up on every call; it may have left the catalog since booking
    pub fn display_info(&self, catalog: &Catalog) -> Result<String, TourError> {
        let entity = catalog
            .get(self.entity_id)
            .ok_or(TourError::EntityNotFound(self.entity_id))?;
        Ok(format!(
            "Booking ID: {}\nVisitor: {}\nBooked: {} ({})\nDate: {}\nStatus: {}",
            self.id,
            self.visitor,
            entity.name(),
            entity.kind(),
            self.date,
            self.status
        ))
    }
}

/// Issues bookings and owns the single booking counter.
#[derive(Debug)]
pub struct BookingManager {
    config: BookingConfig,
    counter: BookingCounter,
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}

impl BookingManager {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            config,
            counter: BookingCounter::new(),
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn book(
        &self,
        catalog: &Catalog,
        visitor: &str,
        entity_id: EntityId,
        date: &str,
        status: Option<BookingStatus>,
    ) -> Result<Booking, TourError> {
        require_non_empty("visitor", visitor)?;
        require_non_empty("date", date)?;
        let entity = catalog
            .get(entity_id)
            .ok_or(TourError::EntityNotFound(entity_id))?;

        let sequence = self.counter.increment();
        let booking = Booking {
            id: format!("{}-{:04}", self.config.id_prefix, sequence),
            visitor: visitor.to_string(),
            entity_id,
            date: date.to_string(),
            status: status.unwrap_or(self.config.default_status),
            created_at: Utc::now(),
        };

        info!(
            id = %booking.id,
            visitor,
            entity = entity.name(),
            total = sequence,
            "booking issued"
        );
        Ok(booking)
    }

    pub fn total_bookings(&self) -> usize {
        self.counter.total()
    }

    pub fn summary(&self) -> String {
        format!("Total Bookings: {}", self.total_bookings())
    }
}
