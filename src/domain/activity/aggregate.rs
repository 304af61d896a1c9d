//! Activity aggregate entity.
//!
//! Activities are the only records this service keeps. Each one is keyed by
//! its name and carries the ordered list of students signed up for it.

use serde::{Deserialize, Serialize};

use super::errors::SignupError;
use crate::domain::foundation::ValidationError;

/// Activity aggregate - one extracurricular offering.
///
/// # Invariants
///
/// - `name` is non-empty and never changes after creation
/// - `max_participants` is at least 1
/// - `participants.len() <= max_participants`
/// - `participants` contains no duplicates and is kept in signup order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    /// Create a new activity, checking every invariant.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the capacity is zero or already exceeded
    /// - `InvalidFormat` if the participant list repeats an email
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if max_participants == 0 {
            return Err(ValidationError::out_of_range(
                "max_participants",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if participants.len() > max_participants as usize {
            return Err(ValidationError::out_of_range(
                "participants",
                0,
                i64::from(max_participants),
                participants.len() as i64,
            ));
        }
        for (idx, email) in participants.iter().enumerate() {
            if participants[..idx].contains(email) {
                return Err(ValidationError::invalid_format(
                    "participants",
                    format!("duplicate entry '{}'", email),
                ));
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        })
    }

    /// Reconstitute an activity from persistence (no validation).
    pub fn reconstitute(
        name: String,
        description: String,
        schedule: String,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            name,
            description,
            schedule,
            max_participants,
            participants,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the activity name (its storage key).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Returns participants in signup order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of open places left.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signup rules
    // ─────────────────────────────────────────────────────────────────────────

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Checks whether `email` may join, duplicate check first.
    ///
    /// # Errors
    ///
    /// - `AlreadySignedUp` if the email is already a participant
    /// - `ActivityFull` if there is no capacity left
    pub fn ensure_can_join(&self, email: &str) -> Result<(), SignupError> {
        if self.has_participant(email) {
            return Err(SignupError::AlreadySignedUp {
                activity: self.name.clone(),
                email: email.to_string(),
            });
        }
        if self.is_full() {
            return Err(SignupError::ActivityFull {
                activity: self.name.clone(),
                max_participants: self.max_participants,
            });
        }
        Ok(())
    }

    /// Appends `email` if the signup rules allow it.
    ///
    /// Returns `false` and leaves the record untouched otherwise.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.ensure_can_join(email).is_err() {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }
}
