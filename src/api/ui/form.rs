//! Turns a submitted HTML form into a record

use std::collections::HashMap;

use crate::domain::diagnosis::{FIELDS, parse_field_value};
use crate::domain::{MedicalInputRecord, RecordValidationError};

/// Submission that could not be read as numbers
#[derive(Debug, Clone, PartialEq)]
pub struct FormError {
    /// What the form should show again, invalid values replaced by defaults
    pub record: MedicalInputRecord,
    pub invalid: Vec<RecordValidationError>,
}

impl FormError {
    pub fn message(&self) -> String {
        self.invalid
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Build a record from form values.
///
/// Missing or blank fields take their defaults and numbers are clamped into
/// range. Unknown keys are ignored.
pub fn parse_form(values: &HashMap<String, String>) -> Result<MedicalInputRecord, FormError> {
    let mut row = MedicalInputRecord::default().to_row();
    let mut invalid = Vec::new();

    for (index, field) in FIELDS.iter().enumerate() {
        let Some(input) = values.get(field.key).filter(|v| !v.trim().is_empty()) else {
            continue;
        };

        match parse_field_value(field, input) {
            Ok(value) => row[index] = field.clamp(value),
            Err(e) => invalid.push(e),
        }
    }

    let record = MedicalInputRecord::from_row(row);

    if invalid.is_empty() {
        Ok(record)
    } else {
        Err(FormError { record, invalid })
    }
}
