//! Inference output types

use serde::Serialize;

use super::record::FEATURE_COUNT;

/// Number of classes the classifier distinguishes
pub const CLASS_COUNT: usize = 3;

/// Allowed distance between the probability sum and 1
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Diagnosis classes in classifier order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisLabel {
    NoDiabetes,
    PossibleRisk,
    Diabetes,
}

impl DiagnosisLabel {
    pub const ALL: [Self; CLASS_COUNT] = [Self::NoDiabetes, Self::PossibleRisk, Self::Diabetes];

    /// Map a raw classifier label, `None` for anything outside 0..=2
    pub fn from_class(label: i64) -> Option<Self> {
        match label {
            0 => Some(Self::NoDiabetes),
            1 => Some(Self::PossibleRisk),
            2 => Some(Self::Diabetes),
            _ => None,
        }
    }

    pub fn class(&self) -> i64 {
        match self {
            Self::NoDiabetes => 0,
            Self::PossibleRisk => 1,
            Self::Diabetes => 2,
        }
    }

    /// Name used when listing class probabilities
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::NoDiabetes => "No Diabetes",
            Self::PossibleRisk => "Possible Risk",
            Self::Diabetes => "Diabetes",
        }
    }
}

/// Output of one pass through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    /// Raw classifier label
    pub label: i64,
    /// Class probabilities in class order
    pub probabilities: [f64; CLASS_COUNT],
    /// Record after scaling, in training order
    pub scaled: [f64; FEATURE_COUNT],
}

impl InferenceResult {
    pub fn diagnosis(&self) -> Option<DiagnosisLabel> {
        DiagnosisLabel::from_class(self.label)
    }

    /// Probability assigned to `label`
    pub fn probability_of(&self, label: DiagnosisLabel) -> f64 {
        self.probabilities[label.class() as usize]
    }
}
