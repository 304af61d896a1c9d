//! Activity store port.
//!
//! Defines the contract for persisting activity records keyed by name.
//! Implementations own the connection or memory they work against; one
//! instance is created at startup and shared by every request.
//!
//! # Design
//!
//! - **Keyed by name**: the activity name is the primary key
//! - **Append-only mutation**: participants are only ever appended
//! - **Conditional append**: `append_participant` re-checks the signup
//!   rules atomically inside the store and reports whether it wrote

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;

/// Stream of stored activities, produced lazily by the adapter.
pub type ActivityStream<'a> = BoxStream<'a, Result<Activity, DomainError>>;

/// Repository port for activity persistence.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Number of stored activities.
    async fn count(&self) -> Result<u64, DomainError>;

    /// Bulk-create activities, keyed by their names.
    ///
    /// Either every record is written or none is.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if any name is already stored (or repeated in `records`)
    /// - `DatabaseError` on persistence failure
    async fn insert_many(&self, records: &[Activity]) -> Result<(), DomainError>;

    /// Point lookup by name. Returns `None` if absent.
    async fn find_one(&self, name: &str) -> Result<Option<Activity>, DomainError>;

    /// Every stored activity.
    fn find_all(&self) -> ActivityStream<'_>;

    /// Atomically append `email` to the named activity's participants.
    ///
    /// The append only happens if the activity exists, `email` is not
    /// already present, and the activity has capacity left. Returns whether
    /// the record was modified.
    async fn append_participant(&self, name: &str, email: &str) -> Result<bool, DomainError>;

    /// Release the underlying resources. Called once on shutdown.
    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ActivityStore) {}
    }
}
