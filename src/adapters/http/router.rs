//! Application router: API routes, root redirect, static files, and layers.

use std::path::Path;
use std::time::Duration;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::activities::{activities_router, ActivitiesAppState};

/// Front-end entry page the root path redirects to.
pub const INDEX_PAGE: &str = "/static/index.html";

/// Builds the complete HTTP surface.
///
/// Routes:
/// - `GET /` - Temporary redirect to [`INDEX_PAGE`]
/// - `GET /activities`, `POST /activities/:activity_name/signup`
/// - `GET /static/*` - Files from `static_dir`
pub fn app_router(
    state: ActivitiesAppState,
    static_dir: impl AsRef<Path>,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .merge(activities_router())
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}
