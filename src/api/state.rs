//! Application state shared by every handler

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{DiagnosisContext, DomainError, InferenceResult, MedicalInputRecord, infer};
use crate::infrastructure::observability::{DiagnosisOutcome, record_diagnosis};

/// Shared, read-only state; cloning only bumps a reference count
#[derive(Clone, Debug)]
pub struct AppState {
    pub context: Arc<DiagnosisContext>,
}

impl AppState {
    pub fn new(context: DiagnosisContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }

    /// Run one submission through the pipeline and count its outcome.
    ///
    /// Failures are returned to the caller, which renders them; the state
    /// itself is never touched, so the next submission starts clean.
    pub fn diagnose(
        &self,
        surface: &'static str,
        record: &MedicalInputRecord,
    ) -> Result<InferenceResult, DomainError> {
        match infer(record, &self.context) {
            Ok(result) => {
                debug!(
                    surface,
                    label = result.label,
                    probabilities = ?result.probabilities,
                    "Diagnosis completed"
                );
                record_diagnosis(surface, DiagnosisOutcome::Success, Some(result.label));
                Ok(result)
            }
            Err(e) => {
                warn!(surface, error = %e, "Diagnosis failed");
                record_diagnosis(surface, DiagnosisOutcome::Failed, None);
                Err(e)
            }
        }
    }
}
