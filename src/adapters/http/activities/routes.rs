//! Route configuration for activity endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_activities, sign_up, ActivitiesAppState};

/// Creates the activity router.
///
/// Routes:
/// - `GET /activities` - All activities keyed by name
/// - `POST /activities/:activity_name/signup?email=...` - Sign a student up
pub fn activities_router() -> Router<ActivitiesAppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(sign_up))
}
