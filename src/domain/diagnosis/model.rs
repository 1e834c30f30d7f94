//! Capability traits for the pre-trained artifacts

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Fitted normalization applied to a raw feature row
#[cfg_attr(test, automock)]
pub trait Transform: Send + Sync {
    /// Map a raw row to the standardized row the classifier expects
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, DomainError>;

    /// Short name of the transform, e.g. `standard`
    fn kind(&self) -> &'static str;
}

/// Fitted classifier exposing labels and class probabilities
#[cfg_attr(test, automock)]
pub trait PredictWithProbability: Send + Sync {
    /// Predicted class label for a scaled row
    fn predict(&self, row: &[f64]) -> Result<i64, DomainError>;

    /// Probability per class, in the order of [`classes`](Self::classes)
    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, DomainError>;

    /// Class labels the classifier was fitted on
    fn classes(&self) -> Vec<i64>;

    /// Short name of the classifier, e.g. `linear`
    fn kind(&self) -> &'static str;
}
