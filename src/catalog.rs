// Registry owning every bookable entity behind a stable EntityId

use std::collections::BTreeMap;

use tracing::debug;

use crate::entity::{EntityId, EntitySummary, TourEntity};
use crate::error::TourError;
use crate::feedback::Feedback;

#[derive(Debug, Default)]
pub struct Catalog {
    entities: BTreeMap<EntityId, Box<dyn TourEntity>>,
    next_id: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // Ids are handed out in insertion order and never reused
    pub fn insert<E>(&mut self, entity: E) -> EntityId
    where
        E: TourEntity + 'static,
    {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        debug!(%id, name = entity.name(), kind = %entity.kind(), "entity registered");
        self.entities.insert(id, Box::new(entity));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn TourEntity> {
        self.entities.get(&id).map(|e| e.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn TourEntity + 'static)> {
        self.entities.get_mut(&id).map(|e| e.as_mut())
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Box<dyn TourEntity>> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            debug!(%id, "entity removed");
        }
        removed
    }

    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, e)| e.name() == name)
            .map(|(id, _)| *id)
    }

    pub fn rate(&mut self, id: EntityId, rating: i32) -> Result<f64, TourError> {
        let entity = self.get_mut(id).ok_or(TourError::EntityNotFound(id))?;
        entity.update_rating(rating)?;
        Ok(entity.rating())
    }

    pub fn submit_feedback(&mut self, id: EntityId, feedback: Feedback) -> Result<f64, TourError> {
        let entity = self.get_mut(id).ok_or(TourError::EntityNotFound(id))?;
        entity.record_feedback(feedback)?;
        Ok(entity.rating())
    }

    // Rates an attraction inside a package held by the catalog
    pub fn rate_member(&mut self, id: EntityId, member: &str, rating: i32) -> Result<f64, TourError> {
        let entity = self.get_mut(id).ok_or(TourError::EntityNotFound(id))?;
        entity.rate_member(member, rating)?;
        Ok(entity.rating())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &dyn TourEntity)> {
        self.entities.iter().map(|(id, e)| (*id, e.as_ref()))
    }

    pub fn summaries(&self) -> Vec<EntitySummary> {
        self.entities.values().map(|e| e.summary()).collect()
    }

    pub fn to_json(&self) -> Result<String, TourError> {
        serde_json::to_string_pretty(&self.summaries())
            .map_err(|e| TourError::SerializationError(e.to_string()))
    }
}
