//! In-Memory Activity Store Adapter
//!
//! Keeps activities in a process-local map. Used by tests and by the
//! `memory` database backend for local development.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;
use crate::ports::{ActivityStore, ActivityStream};

/// In-memory storage for activities, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityStore {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl InMemoryActivityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `activities` (useful for tests).
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let map = activities
            .into_iter()
            .map(|a| (a.name().to_string(), a))
            .collect();
        Self {
            activities: Arc::new(RwLock::new(map)),
        }
    }

    /// Snapshot of a single activity without going through the port.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.activities.read().await.len() as u64)
    }

    async fn insert_many(&self, records: &[Activity]) -> Result<(), DomainError> {
        let mut activities = self.activities.write().await;

        let mut batch = HashSet::with_capacity(records.len());
        for record in records {
            if activities.contains_key(record.name()) || !batch.insert(record.name()) {
                return Err(DomainError::duplicate_key(record.name()));
            }
        }

        for record in records {
            activities.insert(record.name().to_string(), record.clone());
        }
        Ok(())
    }

    async fn find_one(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        Ok(self.activities.read().await.get(name).cloned())
    }

    fn find_all(&self) -> ActivityStream<'_> {
        let activities = Arc::clone(&self.activities);
        stream::once(async move {
            let snapshot: Vec<Activity> = activities.read().await.values().cloned().collect();
            stream::iter(snapshot.into_iter().map(Ok::<Activity, DomainError>))
        })
        .flatten()
        .boxed()
    }

    async fn append_participant(&self, name: &str, email: &str) -> Result<bool, DomainError> {
        let mut activities = self.activities.write().await;
        Ok(activities
            .get_mut(name)
            .map(|activity| activity.add_participant(email))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use futures::TryStreamExt;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity::new(
            name,
            format!("{} description", name),
            "Mondays",
            max,
            participants.iter().map(|p| p.to_string()).collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_many_then_count_and_find() {
        let store = InMemoryActivityStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store
            .insert_many(&[activity("Art", 5, &[]), activity("Drama", 5, &["a@x.edu"])])
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        let drama = store.find_one("Drama").await.unwrap().unwrap();
        assert_eq!(drama.participants(), ["a@x.edu".to_string()]);
        assert!(store.find_one("Band").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_many_rejects_existing_key_without_partial_write() {
        let store = InMemoryActivityStore::with_activities([activity("Art", 5, &[])]);

        let err = store
            .insert_many(&[activity("Drama", 5, &[]), activity("Art", 9, &[])])
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.find_one("Drama").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_many_rejects_duplicates_within_batch() {
        let store = InMemoryActivityStore::new();
        let err = store
            .insert_many(&[activity("Art", 5, &[]), activity("Art", 6, &[])])
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_all_streams_every_record() {
        let store = InMemoryActivityStore::with_activities([
            activity("Drama", 5, &[]),
            activity("Art", 5, &[]),
        ]);

        let all: Vec<Activity> = store.find_all().try_collect().await.unwrap();
        let names: Vec<&str> = all.iter().map(Activity::name).collect();
        assert_eq!(names, vec!["Art", "Drama"]);
    }

    #[tokio::test]
    async fn append_participant_reports_modification() {
        let store = InMemoryActivityStore::with_activities([activity("Art", 2, &["a@x.edu"])]);

        assert!(store.append_participant("Art", "b@x.edu").await.unwrap());
        let art = store.get("Art").await.unwrap();
        assert_eq!(art.participants(), ["a@x.edu".to_string(), "b@x.edu".to_string()]);
    }

    #[tokio::test]
    async fn append_participant_is_conditional() {
        let store = InMemoryActivityStore::with_activities([activity("Art", 2, &["a@x.edu"])]);

        assert!(!store.append_participant("Art", "a@x.edu").await.unwrap());
        assert!(store.append_participant("Art", "b@x.edu").await.unwrap());
        assert!(!store.append_participant("Art", "c@x.edu").await.unwrap());
        assert!(!store.append_participant("Band", "c@x.edu").await.unwrap());

        assert_eq!(store.get("Art").await.unwrap().participant_count(), 2);
    }
}
