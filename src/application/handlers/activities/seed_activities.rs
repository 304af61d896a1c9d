//! SeedActivitiesHandler - Startup initialization of an empty store.

use std::sync::Arc;

use crate::domain::activity::{initial_activities, Activity};
use crate::domain::foundation::DomainError;
use crate::ports::ActivityStore;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many activities were written.
    Seeded(usize),
    /// The store already held this many activities; nothing was written.
    AlreadyPopulated(u64),
}

/// Handler that writes the built-in catalog into an empty store.
///
/// Running it against a populated store is a no-op, so restarting the
/// process against a persistent store never duplicates records.
pub struct SeedActivitiesHandler {
    store: Arc<dyn ActivityStore>,
    catalog: Vec<Activity>,
}

impl SeedActivitiesHandler {
    /// Seeds with the built-in catalog.
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self::with_catalog(store, initial_activities())
    }

    /// Seeds with a caller-supplied catalog.
    pub fn with_catalog(store: Arc<dyn ActivityStore>, catalog: Vec<Activity>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self) -> Result<SeedOutcome, DomainError> {
        let existing = self.store.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Activity store already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        self.store.insert_many(&self.catalog).await?;
        tracing::info!(count = self.catalog.len(), "Seeded activity store");

        Ok(SeedOutcome::Seeded(self.catalog.len()))
    }
}
