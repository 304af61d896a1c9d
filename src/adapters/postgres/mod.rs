//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresActivityStore` - Activity records in the `activities` table

mod activity_store;

pub use activity_store::PostgresActivityStore;
