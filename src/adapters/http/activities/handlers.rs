//! HTTP handlers for activity endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{GetActivitiesHandler, SignUpCommand, SignUpHandler};
use crate::domain::activity::{SignupError, SignupErrorKind};
use crate::ports::ActivityStore;

use super::dto::{activities_response, ErrorResponse, MessageResponse, SignupQuery};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Router state: the process-wide store handle.
#[derive(Clone)]
pub struct ActivitiesAppState {
    pub store: Arc<dyn ActivityStore>,
}

impl ActivitiesAppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub fn get_activities_handler(&self) -> GetActivitiesHandler {
        GetActivitiesHandler::new(self.store.clone())
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /activities - List every activity keyed by name
pub async fn list_activities(State(state): State<ActivitiesAppState>) -> Response {
    match state.get_activities_handler().handle().await {
        Ok(catalog) => (StatusCode::OK, Json(activities_response(catalog))).into_response(),
        Err(e) => {
            tracing::error!("Failed to list activities: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to load activities")),
            )
                .into_response()
        }
    }
}

/// POST /activities/:activity_name/signup?email=... - Sign a student up
pub async fn sign_up(
    State(state): State<ActivitiesAppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Response {
    let cmd = SignUpCommand {
        activity_name,
        email: query.email,
    };

    match state.sign_up_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(MessageResponse::from(result))).into_response(),
        Err(e) => handle_signup_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_signup_error(error: SignupError) -> Response {
    match error.kind() {
        SignupErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.to_string())),
        )
            .into_response(),
        SignupErrorKind::InvalidRequest => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        SignupErrorKind::InternalError => {
            if let SignupError::Infrastructure(msg) = &error {
                tracing::error!("Signup failed in store: {}", msg);
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to sign up")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_error_not_found_maps_to_404() {
        let response = handle_signup_error(SignupError::not_found("Chess Club"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn signup_error_rule_violations_map_to_400() {
        let duplicate = SignupError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        };
        assert_eq!(
            handle_signup_error(duplicate).status(),
            StatusCode::BAD_REQUEST
        );

        let full = SignupError::ActivityFull {
            activity: "Chess Club".to_string(),
            max_participants: 12,
        };
        assert_eq!(handle_signup_error(full).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn signup_error_internal_maps_to_500() {
        let response = handle_signup_error(SignupError::write_failed("Chess Club"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_signup_error(SignupError::infrastructure("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
