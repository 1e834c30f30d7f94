//! Server-rendered HTML form

pub mod form;
pub mod page;

use std::collections::HashMap;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::debug;

use self::form::parse_form;
use self::page::{Outcome, PageView, render_page};
use super::state::AppState;
use crate::domain::present;
use crate::infrastructure::observability::{DiagnosisOutcome, record_diagnosis};

const SURFACE: &str = "form";

/// Create the UI router
pub fn create_ui_router() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

/// GET /
pub async fn show_form() -> Html<String> {
    Html(render_page(&PageView::blank()))
}

/// POST /
///
/// Renders the form again with the submitted values, followed by either the
/// diagnosis or the error panel.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(values): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let record = match parse_form(&values) {
        Ok(record) => record,
        Err(e) => {
            let detail = e.message();
            debug!(error = %detail, "Form submission rejected");
            record_diagnosis(SURFACE, DiagnosisOutcome::Rejected, None);

            let view = PageView {
                record: e.record,
                outcome: Some(Outcome::Failed { detail }),
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(render_page(&view)));
        }
    };

    let (status, outcome) = match state.diagnose(SURFACE, &record) {
        Ok(result) => (
            StatusCode::OK,
            Outcome::Diagnosed {
                text: present(&result),
                result,
            },
        ),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Outcome::Failed {
                detail: e.to_string(),
            },
        ),
    };

    let view = PageView {
        record,
        outcome: Some(outcome),
    };

    (status, Html(render_page(&view)))
}
