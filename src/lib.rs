//! Mergington Activities - Extracurricular activity directory API
//!
//! Lists Mergington High School's activities and lets students sign up,
//! backed by a single collection of activity records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
