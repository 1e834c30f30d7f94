//! Record validation utilities

use std::fmt;

use super::record::{FieldSpec, MedicalInputRecord};
use crate::domain::DomainError;

/// Record validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    /// Value is NaN or infinite
    NotFinite { field: &'static str },
    /// Value outside the field's declared range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Whole-number field received a fractional value
    NotWhole { field: &'static str, value: f64 },
    /// Submitted text could not be read as a number
    NotANumber { field: &'static str, input: String },
}

impl RecordValidationError {
    /// Key of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field }
            | Self::OutOfRange { field, .. }
            | Self::NotWhole { field, .. }
            | Self::NotANumber { field, .. } => field,
        }
    }
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Invalid {} {}: must be between {} and {}",
                field, value, min, max
            ),
            Self::NotWhole { field, value } => {
                write!(f, "Invalid {} {}: must be a whole number", field, value)
            }
            Self::NotANumber { field, input } => {
                write!(f, "Invalid {} '{}': not a number", field, input)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

impl From<RecordValidationError> for DomainError {
    fn from(err: RecordValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate every field of a record against the feature table
pub fn validate_record(record: &MedicalInputRecord) -> Result<(), RecordValidationError> {
    for (field, value) in record.fields() {
        if !value.is_finite() {
            return Err(RecordValidationError::NotFinite { field: field.key });
        }

        if !field.contains(value) {
            return Err(RecordValidationError::OutOfRange {
                field: field.key,
                value,
                min: field.min,
                max: field.max,
            });
        }

        if field.integer && value.fract() != 0.0 {
            return Err(RecordValidationError::NotWhole {
                field: field.key,
                value,
            });
        }
    }

    Ok(())
}

/// Parse one submitted form value for `field`
pub fn parse_field_value(field: &FieldSpec, input: &str) -> Result<f64, RecordValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RecordValidationError::NotANumber {
            field: field.key,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::record::{FIELDS, field};

    #[test]
    fn test_default_record_is_valid() {
        assert!(validate_record(&MedicalInputRecord::default()).is_ok());
    }

    #[test]
    fn test_bounds_are_valid() {
        assert!(validate_record(&MedicalInputRecord::minimum()).is_ok());
        assert!(validate_record(&MedicalInputRecord::maximum()).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let record = MedicalInputRecord {
            hba1c: 21.0,
            ..Default::default()
        };

        let err = validate_record(&record).unwrap_err();
        assert_eq!(err.field(), "hba1c");
        assert_eq!(err.to_string(), "Invalid hba1c 21: must be between 0 and 20");
    }

    #[test]
    fn test_age_below_minimum() {
        let record = MedicalInputRecord {
            age: 9.0,
            ..Default::default()
        };

        assert!(matches!(
            validate_record(&record),
            Err(RecordValidationError::OutOfRange { field: "age", .. })
        ));
    }

    #[test]
    fn test_not_finite() {
        let record = MedicalInputRecord {
            ldl: f64::INFINITY,
            ..Default::default()
        };

        assert_eq!(
            validate_record(&record),
            Err(RecordValidationError::NotFinite { field: "ldl" })
        );
    }

    #[test]
    fn test_fractional_sex_rejected() {
        let record = MedicalInputRecord {
            sex: 0.5,
            ..Default::default()
        };

        assert_eq!(
            validate_record(&record),
            Err(RecordValidationError::NotWhole {
                field: "sex",
                value: 0.5
            })
        );
    }

    fn urea() -> &'static FieldSpec {
        field("urea").unwrap()
    }

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value(urea(), " 4.25 "), Ok(4.25));

        let err = parse_field_value(urea(), "high").unwrap_err();
        assert_eq!(err.field(), "urea");
        assert_eq!(err.to_string(), "Invalid urea 'high': not a number");
    }

    #[test]
    fn test_parse_rejects_nan_text() {
        assert!(parse_field_value(field("age").unwrap(), "NaN").is_err());
    }

    #[test]
    fn test_parse_reports_the_given_field() {
        for spec in FIELDS {
            let err = parse_field_value(&spec, "n/a").unwrap_err();
            assert_eq!(err.field(), spec.key);
        }
    }

    #[test]
    fn test_into_domain_error() {
        let err: DomainError = RecordValidationError::NotFinite { field: "bmi" }.into();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
