//! Diagnosis endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, DiagnoseResponse, Json};
use crate::domain::{MedicalInputRecord, validate_record};
use crate::infrastructure::observability::{DiagnosisOutcome, record_diagnosis};

const SURFACE: &str = "api";

/// POST /v1/diagnose
///
/// Omitted fields take their form defaults. Values outside a field's range
/// are rejected rather than clamped.
pub async fn diagnose(
    State(state): State<AppState>,
    Json(record): Json<MedicalInputRecord>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    debug!(?record, "Diagnosis requested");

    if let Err(e) = validate_record(&record) {
        record_diagnosis(SURFACE, DiagnosisOutcome::Rejected, None);
        return Err(e.into());
    }

    let result = state.diagnose(SURFACE, &record)?;

    Ok(Json(DiagnoseResponse::new(record, &result)))
}
