//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary
//! - `activity` - Activity aggregate, signup rules, and the seed catalog

pub mod activity;
pub mod foundation;
