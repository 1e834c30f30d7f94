//! Diagnosis domain: input record, artifact capabilities, pipeline and presenter

pub mod model;
pub mod pipeline;
pub mod presenter;
pub mod record;
pub mod result;
pub mod validation;

pub use model::{PredictWithProbability, Transform};
pub use pipeline::{DiagnosisContext, check_probabilities, infer};
pub use presenter::{DisplayText, Severity, UNKNOWN_PREDICTION, present, verdict_for};
pub use record::{
    FEATURE_COUNT, FIELDS, FieldGroup, FieldSpec, MedicalInputRecord, feature_columns, field,
};
pub use result::{CLASS_COUNT, DiagnosisLabel, InferenceResult, PROBABILITY_TOLERANCE};
pub use validation::{RecordValidationError, parse_field_value, validate_record};
