//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the activity domain,
//! the ports, and the adapters.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
