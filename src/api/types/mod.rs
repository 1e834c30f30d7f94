//! HTTP request and response types

pub mod diagnosis;
pub mod error;
pub mod json;

pub use diagnosis::{ClassProbabilities, DiagnoseResponse, FormSchemaResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
