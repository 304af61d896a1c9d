//! HTTP adapters - REST API implementations.

pub mod activities;
mod router;

// Re-export key types for convenience
pub use activities::{activities_router, ActivitiesAppState};
pub use router::{app_router, INDEX_PAGE};
