//! Transform-and-predict pipeline over the loaded artifacts

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::model::{PredictWithProbability, Transform};
use super::record::{FEATURE_COUNT, MedicalInputRecord};
use super::result::{CLASS_COUNT, InferenceResult, PROBABILITY_TOLERANCE};
use crate::domain::DomainError;

/// Read-only pair of artifacts shared by every submission
#[derive(Clone)]
pub struct DiagnosisContext {
    scaler: Arc<dyn Transform>,
    classifier: Arc<dyn PredictWithProbability>,
}

impl DiagnosisContext {
    pub fn new(
        scaler: impl Transform + 'static,
        classifier: impl PredictWithProbability + 'static,
    ) -> Self {
        Self {
            scaler: Arc::new(scaler),
            classifier: Arc::new(classifier),
        }
    }

    pub fn scaler(&self) -> &dyn Transform {
        self.scaler.as_ref()
    }

    pub fn classifier(&self) -> &dyn PredictWithProbability {
        self.classifier.as_ref()
    }
}

impl fmt::Debug for DiagnosisContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosisContext")
            .field("scaler", &self.scaler.kind())
            .field("classifier", &self.classifier.kind())
            .finish()
    }
}

/// Run one record through the scaler and classifier
pub fn infer(
    record: &MedicalInputRecord,
    context: &DiagnosisContext,
) -> Result<InferenceResult, DomainError> {
    let row = record.to_row();

    let scaled = context.scaler().transform(&row)?;
    let scaled: [f64; FEATURE_COUNT] = scaled.as_slice().try_into().map_err(|_| {
        DomainError::inference(format!(
            "scaler returned {} values, expected {}",
            scaled.len(),
            FEATURE_COUNT
        ))
    })?;

    let label = context.classifier().predict(&scaled)?;
    let probabilities = check_probabilities(&context.classifier().predict_proba(&scaled)?)?;

    debug!(label, ?probabilities, "Inference completed");

    Ok(InferenceResult {
        label,
        probabilities,
        scaled,
    })
}

/// Ensure a probability vector has one finite entry per class summing to 1
pub fn check_probabilities(probabilities: &[f64]) -> Result<[f64; CLASS_COUNT], DomainError> {
    let probabilities: [f64; CLASS_COUNT] = probabilities.try_into().map_err(|_| {
        DomainError::inference(format!(
            "classifier returned {} probabilities, expected {}",
            probabilities.len(),
            CLASS_COUNT
        ))
    })?;

    if probabilities
        .iter()
        .any(|p| !p.is_finite() || !(0.0..=1.0 + PROBABILITY_TOLERANCE).contains(p))
    {
        return Err(DomainError::inference(format!(
            "classifier returned probabilities outside [0, 1]: {:?}",
            probabilities
        )));
    }

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(DomainError::inference(format!(
            "class probabilities sum to {}, expected 1",
            sum
        )));
    }

    Ok(probabilities)
}
