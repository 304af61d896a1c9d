//! Activity domain module.
//!
//! Holds the `Activity` aggregate, the signup rules it enforces, and the
//! catalog used to seed an empty store.

mod aggregate;
mod catalog;
mod errors;

pub use aggregate::Activity;
pub use catalog::initial_activities;
pub use errors::{SignupError, SignupErrorKind};
