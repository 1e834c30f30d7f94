//! Versioned JSON API

pub mod diagnose;
pub mod form;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/diagnose", post(diagnose::diagnose))
        .route("/form", get(form::form_schema))
}
