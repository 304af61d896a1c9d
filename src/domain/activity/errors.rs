//! Signup-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Coarse failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupErrorKind {
    /// The requested activity does not exist.
    NotFound,
    /// A business rule rejected the signup.
    InvalidRequest,
    /// The store did not apply a signup that passed validation.
    InternalError,
}

/// Errors produced while signing a student up for an activity.
///
/// The `Display` text is the human-readable detail returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },

    /// The conditional append reported no modification.
    #[error("Failed to sign up")]
    WriteFailed { activity: String },

    #[error("{0}")]
    Infrastructure(String),
}

impl SignupError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        SignupError::NotFound {
            activity: activity.into(),
        }
    }

    pub fn write_failed(activity: impl Into<String>) -> Self {
        SignupError::WriteFailed {
            activity: activity.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SignupError::Infrastructure(message.into())
    }

    pub fn kind(&self) -> SignupErrorKind {
        match self {
            SignupError::NotFound { .. } => SignupErrorKind::NotFound,
            SignupError::AlreadySignedUp { .. } | SignupError::ActivityFull { .. } => {
                SignupErrorKind::InvalidRequest
            }
            SignupError::WriteFailed { .. } | SignupError::Infrastructure(_) => {
                SignupErrorKind::InternalError
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SignupError::NotFound { .. } => ErrorCode::ActivityNotFound,
            SignupError::AlreadySignedUp { .. } => ErrorCode::AlreadySignedUp,
            SignupError::ActivityFull { .. } => ErrorCode::ActivityFull,
            SignupError::WriteFailed { .. } => ErrorCode::InternalError,
            SignupError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for SignupError {
    fn from(err: DomainError) -> Self {
        SignupError::Infrastructure(err.to_string())
    }
}
