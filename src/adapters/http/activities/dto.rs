//! HTTP DTOs for activity endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::{ActivityCatalog, ActivityDetails, SignUpResult};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for the signup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One activity in the listing; the name is the enclosing map key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<ActivityDetails> for ActivityResponse {
    fn from(details: ActivityDetails) -> Self {
        Self {
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }
}

/// Full listing keyed by activity name.
pub type ActivitiesResponse = BTreeMap<String, ActivityResponse>;

pub fn activities_response(catalog: ActivityCatalog) -> ActivitiesResponse {
    catalog
        .into_iter()
        .map(|(name, details)| (name, details.into()))
        .collect()
}

/// Confirmation for command endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<SignUpResult> for MessageResponse {
    fn from(result: SignUpResult) -> Self {
        Self {
            message: result.message(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn signup_query_decodes_email() {
        let uri: Uri = "/activities/Chess%20Club/signup?email=new%40mergington.edu"
            .parse()
            .unwrap();
        let Query(query) = Query::<SignupQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.email, "new@mergington.edu");
    }

    #[test]
    fn signup_query_requires_email() {
        let uri: Uri = "/activities/Chess%20Club/signup".parse().unwrap();
        assert!(Query::<SignupQuery>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn activity_listing_serializes_without_name_field() {
        let mut catalog = ActivityCatalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            ActivityDetails {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec!["michael@mergington.edu".to_string()],
            },
        );

        let json = serde_json::to_value(activities_response(catalog)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Chess Club": {
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 12,
                    "participants": ["michael@mergington.edu"]
                }
            })
        );
    }

    #[test]
    fn message_response_uses_confirmation_text() {
        let response: MessageResponse = SignUpResult {
            activity_name: "Gym Class".to_string(),
            email: "new@mergington.edu".to_string(),
        }
        .into();
        assert_eq!(response.message, "Signed up new@mergington.edu for Gym Class");
    }

    #[test]
    fn error_response_constructors_set_codes() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::not_found("x").code, "NOT_FOUND");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
