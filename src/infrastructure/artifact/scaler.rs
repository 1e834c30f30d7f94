//! Fitted feature scalers

use serde::Deserialize;

use crate::domain::diagnosis::{FEATURE_COUNT, feature_columns};
use crate::domain::{DomainError, Transform};

/// Serialized scaler, tagged by `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

/// `(x - mean) / scale` per feature
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// `x * scale + min` per feature
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxScaler {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub min: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerArtifact {
    /// Check shapes, numbers and column names against the feature table
    pub fn validate(&self) -> Result<(), String> {
        let (feature_names, params) = match self {
            Self::Standard(s) => (
                &s.feature_names,
                [("mean", s.mean.as_slice()), ("scale", s.scale.as_slice())],
            ),
            Self::MinMax(s) => (
                &s.feature_names,
                [("min", s.min.as_slice()), ("scale", s.scale.as_slice())],
            ),
        };

        for (name, values) in params {
            check_vector(name, values)?;
        }

        if let Some(names) = feature_names {
            check_feature_names(names)?;
        }

        Ok(())
    }
}

fn check_vector(name: &str, values: &[f64]) -> Result<(), String> {
    if values.len() != FEATURE_COUNT {
        return Err(format!(
            "{} has {} entries, expected {}",
            name,
            values.len(),
            FEATURE_COUNT
        ));
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(format!("{}[{}] is not a finite number", name, index));
    }

    Ok(())
}

fn check_feature_names(names: &[String]) -> Result<(), String> {
    let expected = feature_columns();

    if names.len() != expected.len() || names.iter().zip(expected).any(|(a, b)| a != b) {
        return Err(format!(
            "feature_names {:?} do not match the expected order {:?}",
            names, expected
        ));
    }

    Ok(())
}

fn check_row(row: &[f64], expected: usize) -> Result<(), DomainError> {
    if row.len() != expected {
        return Err(DomainError::inference(format!(
            "scaler expects {} features, got {}",
            expected,
            row.len()
        )));
    }

    Ok(())
}

impl Transform for StandardScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        check_row(row, self.mean.len())?;

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                // A constant feature was fitted with zero variance
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }

    fn kind(&self) -> &'static str {
        "standard"
    }
}

impl Transform for MinMaxScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        check_row(row, self.min.len())?;

        Ok(row
            .iter()
            .zip(self.min.iter().zip(&self.scale))
            .map(|(x, (min, scale))| x * scale + min)
            .collect())
    }

    fn kind(&self) -> &'static str {
        "min_max"
    }
}

impl Transform for ScalerArtifact {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        match self {
            Self::Standard(s) => s.transform(row),
            Self::MinMax(s) => s.transform(row),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Standard(s) => s.kind(),
            Self::MinMax(s) => s.kind(),
        }
    }
}
