//! Pins the shipped artifacts' behaviour on known records

use std::path::PathBuf;

use diabetes_diagnosis::config::ArtifactConfig;
use diabetes_diagnosis::domain::diagnosis::PROBABILITY_TOLERANCE;
use diabetes_diagnosis::domain::{DiagnosisContext, DomainError, MedicalInputRecord, infer, present};
use diabetes_diagnosis::infrastructure::artifact::ArtifactLoader;
use serde::Deserialize;

const TOLERANCE: f64 = 1e-9;

#[derive(Deserialize)]
struct Golden {
    record: [f64; 12],
    scaled: [f64; 12],
    label: i64,
    probabilities: [f64; 3],
}

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn shipped_config() -> ArtifactConfig {
    ArtifactConfig {
        scaler_path: root().join("artifacts/scaler.json"),
        classifier_path: root().join("artifacts/classifier.json"),
    }
}

fn context() -> DiagnosisContext {
    ArtifactLoader::load(&shipped_config()).unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < TOLERANCE, "index {}: {} != {}", i, a, e);
    }
}

#[test]
fn default_record_matches_golden_file() {
    let golden: Golden = serde_json::from_str(
        &std::fs::read_to_string(root().join("tests/golden/default_record.json")).unwrap(),
    )
    .unwrap();

    let record = MedicalInputRecord::from_row(golden.record);
    assert_eq!(record, MedicalInputRecord::default());

    let result = infer(&record, &context()).unwrap();

    assert_eq!(result.label, golden.label);
    assert_close(&result.scaled, &golden.scaled);
    assert_close(&result.probabilities, &golden.probabilities);
    assert_eq!(present(&result).verdict, "No Diabetes Detected.");
}

#[test]
fn every_bound_yields_a_valid_distribution() {
    let context = context();
    let mut records = vec![MedicalInputRecord::minimum(), MedicalInputRecord::maximum()];

    let defaults = MedicalInputRecord::default().to_row();
    let lows = MedicalInputRecord::minimum().to_row();
    let highs = MedicalInputRecord::maximum().to_row();
    for i in 0..defaults.len() {
        for bound in [lows[i], highs[i]] {
            let mut row = defaults;
            row[i] = bound;
            records.push(MedicalInputRecord::from_row(row));
        }
    }

    for record in records {
        let result = infer(&record, &context).unwrap();

        assert!((0..=2).contains(&result.label), "{:?}", record);
        assert!(result.probabilities.iter().all(|p| (0.0..=1.0).contains(p)));

        let sum: f64 = result.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < PROBABILITY_TOLERANCE, "{:?}", record);
    }
}

#[test]
fn inference_is_idempotent() {
    let context = context();
    let record = MedicalInputRecord {
        age: 58.0,
        hba1c: 9.1,
        bmi: 34.2,
        ..Default::default()
    };

    let first = infer(&record, &context).unwrap();
    let second = infer(&record, &context).unwrap();

    assert_eq!(first, second);
}

#[test]
fn high_hba1c_raises_diabetes_probability() {
    let context = context();
    let baseline = infer(&MedicalInputRecord::default(), &context).unwrap();
    let elevated = infer(
        &MedicalInputRecord {
            hba1c: 12.0,
            ..Default::default()
        },
        &context,
    )
    .unwrap();

    assert!(elevated.probabilities[2] > baseline.probabilities[2]);
}

#[test]
fn corrupt_artifact_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let scaler_path = dir.path().join("scaler.json");
    std::fs::write(&scaler_path, r#"{"kind": "standard", "mean": [1.0, 2.0"#).unwrap();

    let err = ArtifactLoader::load(&ArtifactConfig {
        scaler_path,
        ..shipped_config()
    })
    .unwrap_err();

    assert!(matches!(err, DomainError::Artifact { .. }));
}
