//! GetActivitiesHandler - Query handler listing every activity.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::TryStreamExt;

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;
use crate::ports::ActivityStore;

/// Activity fields without the name, which becomes the catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityDetails {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity.participants().to_vec(),
        }
    }
}

/// Every activity keyed by name.
pub type ActivityCatalog = BTreeMap<String, ActivityDetails>;

/// Handler for listing all activities.
pub struct GetActivitiesHandler {
    store: Arc<dyn ActivityStore>,
}

impl GetActivitiesHandler {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<ActivityCatalog, DomainError> {
        self.store
            .find_all()
            .map_ok(|activity| (activity.name().to_string(), ActivityDetails::from(activity)))
            .try_collect()
            .await
    }
}
