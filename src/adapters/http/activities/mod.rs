//! HTTP adapter for activity endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    activities_response, ActivitiesResponse, ActivityResponse, ErrorResponse, MessageResponse,
    SignupQuery,
};
pub use handlers::ActivitiesAppState;
pub use routes::activities_router;
