//! Loads the scaler and classifier from disk, once, at startup

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::classifier::ClassifierArtifact;
use super::scaler::ScalerArtifact;
use crate::config::ArtifactConfig;
use crate::domain::{DiagnosisContext, DomainError, PredictWithProbability, Transform};

/// Reads and validates the pre-trained artifacts
#[derive(Debug, Default, Clone, Copy)]
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Load both artifacts and pair them into a context
    pub fn load(config: &ArtifactConfig) -> Result<DiagnosisContext, DomainError> {
        let scaler = Self::load_scaler(&config.scaler_path)?;
        let classifier = Self::load_classifier(&config.classifier_path)?;

        info!(
            scaler = scaler.kind(),
            classifier = classifier.kind(),
            classes = ?classifier.classes(),
            "Artifacts loaded"
        );

        Ok(DiagnosisContext::new(scaler, classifier))
    }

    pub fn load_scaler(path: &Path) -> Result<ScalerArtifact, DomainError> {
        let scaler: ScalerArtifact = read_json(path)?;
        scaler
            .validate()
            .map_err(|message| DomainError::artifact(path.display().to_string(), message))?;

        Ok(scaler)
    }

    pub fn load_classifier(path: &Path) -> Result<ClassifierArtifact, DomainError> {
        let classifier: ClassifierArtifact = read_json(path)?;
        classifier
            .validate()
            .map_err(|message| DomainError::artifact(path.display().to_string(), message))?;

        Ok(classifier)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DomainError::artifact(path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| {
        DomainError::artifact(path.display().to_string(), format!("invalid artifact: {}", e))
    })
}
