//! Fitted classifiers

use serde::Deserialize;

use crate::domain::diagnosis::{CLASS_COUNT, FEATURE_COUNT};
use crate::domain::{DomainError, PredictWithProbability};

/// Serialized classifier, tagged by `kind`.
///
/// Only linear models are supported. The shipped `artifacts/classifier.json`
/// holds hand-set coefficients, not weights exported from a trained SVC.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Linear(LinearClassifier),
}

/// How per-class decision values become probabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiClass {
    /// Softmax over all decision values
    #[default]
    Multinomial,
    /// Independent logistic per class, normalised to sum to one
    Ovr,
}

/// Linear model: one weight row and intercept per class
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    pub classes: Vec<i64>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    #[serde(default)]
    pub multi_class: MultiClass,
}

impl LinearClassifier {
    /// `W x + b`, one value per class
    pub fn decision_function(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        if row.len() != FEATURE_COUNT {
            return Err(DomainError::inference(format!(
                "classifier expects {} features, got {}",
                FEATURE_COUNT,
                row.len()
            )));
        }

        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, intercept)| {
                weights.iter().zip(row).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() != CLASS_COUNT {
            return Err(format!(
                "classifier has {} classes, expected {}",
                self.classes.len(),
                CLASS_COUNT
            ));
        }

        if self.coefficients.len() != self.classes.len() {
            return Err(format!(
                "coefficients has {} rows, expected one per class ({})",
                self.coefficients.len(),
                self.classes.len()
            ));
        }

        if self.intercepts.len() != self.classes.len() {
            return Err(format!(
                "intercepts has {} entries, expected one per class ({})",
                self.intercepts.len(),
                self.classes.len()
            ));
        }

        for (index, weights) in self.coefficients.iter().enumerate() {
            if weights.len() != FEATURE_COUNT {
                return Err(format!(
                    "coefficients[{}] has {} entries, expected {}",
                    index,
                    weights.len(),
                    FEATURE_COUNT
                ));
            }
        }

        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());

        if !all_finite {
            return Err("classifier parameters must be finite numbers".to_string());
        }

        Ok(())
    }
}

/// Index of the largest value, first one on ties
fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, &value)| match best {
            Some((_, current)) if current >= value => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}

fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

fn sigmoid(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}

impl PredictWithProbability for LinearClassifier {
    fn predict(&self, row: &[f64]) -> Result<i64, DomainError> {
        let decision = self.decision_function(row)?;

        argmax(&decision)
            .and_then(|index| self.classes.get(index).copied())
            .ok_or_else(|| DomainError::inference("classifier has no classes"))
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        let decision = self.decision_function(row)?;

        let probabilities = match self.multi_class {
            MultiClass::Multinomial => softmax(&decision),
            MultiClass::Ovr => {
                let raw: Vec<f64> = decision.into_iter().map(sigmoid).collect();
                let sum: f64 = raw.iter().sum();
                raw.into_iter().map(|p| p / sum).collect()
            }
        };

        Ok(probabilities)
    }

    fn classes(&self) -> Vec<i64> {
        self.classes.clone()
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

impl ClassifierArtifact {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Linear(c) => c.validate(),
        }
    }
}

impl PredictWithProbability for ClassifierArtifact {
    fn predict(&self, row: &[f64]) -> Result<i64, DomainError> {
        match self {
            Self::Linear(c) => c.predict(row),
        }
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        match self {
            Self::Linear(c) => c.predict_proba(row),
        }
    }

    fn classes(&self) -> Vec<i64> {
        match self {
            Self::Linear(c) => c.classes(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Linear(c) => c.kind(),
        }
    }
}
