//! SignUpHandler - Command handler adding a student to an activity.

use std::sync::Arc;

use crate::domain::activity::SignupError;
use crate::ports::ActivityStore;

/// Command to sign a student up for an activity.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub activity_name: String,
    pub email: String,
}

/// Result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub activity_name: String,
    pub email: String,
}

impl SignUpResult {
    /// Confirmation shown to the student.
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}

/// Handler for activity signups.
pub struct SignUpHandler {
    store: Arc<dyn ActivityStore>,
}

impl SignUpHandler {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, SignupError> {
        // 1. Load activity
        let activity = self
            .store
            .find_one(&cmd.activity_name)
            .await?
            .ok_or_else(|| SignupError::not_found(&cmd.activity_name))?;

        // 2. Duplicate and capacity checks against the snapshot
        if let Err(e) = activity.ensure_can_join(&cmd.email) {
            tracing::debug!(
                activity = %cmd.activity_name,
                email = %cmd.email,
                "Signup rejected: {}",
                e
            );
            return Err(e);
        }

        // 3. Conditional append; the store re-checks both rules atomically
        let modified = self
            .store
            .append_participant(&cmd.activity_name, &cmd.email)
            .await?;
        if !modified {
            tracing::warn!(
                activity = %cmd.activity_name,
                email = %cmd.email,
                "Participant append did not modify the activity"
            );
            return Err(SignupError::write_failed(cmd.activity_name));
        }

        tracing::info!(activity = %cmd.activity_name, email = %cmd.email, "Signed up participant");

        Ok(SignUpResult {
            activity_name: cmd.activity_name,
            email: cmd.email,
        })
    }
}
