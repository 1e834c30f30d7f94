//! Request and response bodies for the diagnosis endpoints

use serde::Serialize;

use crate::domain::diagnosis::{FIELDS, FieldGroup, FieldSpec};
use crate::domain::{DiagnosisLabel, InferenceResult, MedicalInputRecord, Severity, present};

/// Probabilities keyed by class name
#[derive(Debug, Clone, Serialize)]
pub struct ClassProbabilities {
    pub no_diabetes: f64,
    pub possible_risk: f64,
    pub diabetes: f64,
}

/// Response body for `POST /v1/diagnose`
#[derive(Debug, Clone, Serialize)]
pub struct DiagnoseResponse {
    /// Raw classifier label
    pub label: i64,
    /// Known class name, absent for labels outside 0..=2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<DiagnosisLabel>,
    pub verdict: &'static str,
    pub severity: Severity,
    pub probabilities: ClassProbabilities,
    /// `No Diabetes: 0.xx, Possible Risk: 0.xx, Diabetes: 0.xx`
    pub summary: String,
    pub input: MedicalInputRecord,
    pub scaled: Vec<f64>,
}

impl DiagnoseResponse {
    pub fn new(input: MedicalInputRecord, result: &InferenceResult) -> Self {
        let text = present(result);

        Self {
            label: result.label,
            diagnosis: result.diagnosis(),
            verdict: text.verdict,
            severity: text.severity,
            probabilities: ClassProbabilities {
                no_diabetes: result.probability_of(DiagnosisLabel::NoDiabetes),
                possible_risk: result.probability_of(DiagnosisLabel::PossibleRisk),
                diabetes: result.probability_of(DiagnosisLabel::Diabetes),
            },
            summary: text.probabilities,
            input,
            scaled: result.scaled.to_vec(),
        }
    }
}

/// Response body for `GET /v1/form`
#[derive(Debug, Clone, Serialize)]
pub struct FormSchemaResponse {
    pub fields: &'static [FieldSpec],
    pub groups: [FieldGroup; 2],
}

impl FormSchemaResponse {
    pub fn new() -> Self {
        Self {
            fields: &FIELDS,
            groups: [FieldGroup::Left, FieldGroup::Right],
        }
    }
}

impl Default for FormSchemaResponse {
    fn default() -> Self {
        Self::new()
    }
}
