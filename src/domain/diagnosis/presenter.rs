//! Turns an inference result into the text shown to the user

use serde::Serialize;

use super::result::{CLASS_COUNT, DiagnosisLabel, InferenceResult};

/// Text shown when the classifier emits a label outside the known classes
pub const UNKNOWN_PREDICTION: &str = "Unknown prediction.";

/// How the verdict should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Unknown => "unknown",
        }
    }
}

/// Rendered verdict and probability summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayText {
    pub verdict: &'static str,
    pub severity: Severity,
    pub probabilities: String,
}

/// Verdict text for a raw classifier label
pub fn verdict_for(label: i64) -> &'static str {
    match DiagnosisLabel::from_class(label) {
        Some(DiagnosisLabel::NoDiabetes) => "No Diabetes Detected.",
        Some(DiagnosisLabel::PossibleRisk) => "Possible Risk of Diabetes. Monitor regularly.",
        Some(DiagnosisLabel::Diabetes) => {
            "Diabetes Confirmed. Please consult a medical professional."
        }
        None => UNKNOWN_PREDICTION,
    }
}

fn severity_for(label: i64) -> Severity {
    match DiagnosisLabel::from_class(label) {
        Some(DiagnosisLabel::NoDiabetes) => Severity::Success,
        Some(DiagnosisLabel::PossibleRisk) => Severity::Warning,
        Some(DiagnosisLabel::Diabetes) => Severity::Danger,
        None => Severity::Unknown,
    }
}

/// `No Diabetes: 0.12, Possible Risk: 0.30, Diabetes: 0.58`
pub fn format_probabilities(probabilities: &[f64; CLASS_COUNT]) -> String {
    DiagnosisLabel::ALL
        .iter()
        .zip(probabilities)
        .map(|(label, p)| format!("{}: {:.2}", label.short_name(), p))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn present(result: &InferenceResult) -> DisplayText {
    DisplayText {
        verdict: verdict_for(result.label),
        severity: severity_for(result.label),
        probabilities: format_probabilities(&result.probabilities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::record::FEATURE_COUNT;

    fn result(label: i64) -> InferenceResult {
        InferenceResult {
            label,
            probabilities: [0.123, 0.456, 0.421],
            scaled: [0.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn test_present_no_diabetes() {
        let text = present(&result(0));
        assert_eq!(text.verdict, "No Diabetes Detected.");
        assert_eq!(text.severity, Severity::Success);
    }

    #[test]
    fn test_present_possible_risk() {
        let text = present(&result(1));
        assert!(text.verdict.starts_with("Possible Risk"));
        assert_eq!(text.severity, Severity::Warning);
    }

    #[test]
    fn test_present_confirmed() {
        let text = present(&result(2));
        assert!(text.verdict.starts_with("Diabetes Confirmed"));
        assert_eq!(text.severity, Severity::Danger);
    }

    #[test]
    fn test_present_unknown_labels() {
        for label in [-1, 3, 42, i64::MAX] {
            let text = present(&result(label));
            assert_eq!(text.verdict, UNKNOWN_PREDICTION);
            assert_eq!(text.severity, Severity::Unknown);
        }
    }

    #[test]
    fn test_probabilities_two_decimals_in_class_order() {
        assert_eq!(
            present(&result(0)).probabilities,
            "No Diabetes: 0.12, Possible Risk: 0.46, Diabetes: 0.42"
        );
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(
            serde_json::to_string(&Severity::Danger).unwrap(),
            "\"danger\""
        );
        assert_eq!(Severity::Warning.as_str(), "warning");
    }
}
