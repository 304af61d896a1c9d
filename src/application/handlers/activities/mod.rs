//! Activity command and query handlers.

mod get_activities;
mod seed_activities;
mod sign_up;

pub use get_activities::{ActivityCatalog, ActivityDetails, GetActivitiesHandler};
pub use seed_activities::{SeedActivitiesHandler, SeedOutcome};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
