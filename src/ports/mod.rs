//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ActivityStore` - Persistence of activity records

mod activity_store;

pub use activity_store::{ActivityStore, ActivityStream};
