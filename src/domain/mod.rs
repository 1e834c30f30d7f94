//! Domain layer - Core business logic and entities

pub mod diagnosis;
pub mod error;

pub use diagnosis::{
    DiagnosisContext, DiagnosisLabel, DisplayText, InferenceResult, MedicalInputRecord,
    PredictWithProbability, RecordValidationError, Severity, Transform, infer, present,
    validate_record,
};
pub use error::DomainError;
