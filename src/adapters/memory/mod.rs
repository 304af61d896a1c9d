//! In-memory adapters.

mod in_memory_activity_store;

pub use in_memory_activity_store::InMemoryActivityStore;
