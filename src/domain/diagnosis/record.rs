//! Medical input record and the feature table it is built from.
//!
//! The order of [`FIELDS`] is the column order the scaler and classifier were
//! fitted on. Everything that renders, parses or validates a record walks this
//! table, so the order is defined in exactly one place.

use serde::{Deserialize, Serialize};

/// Number of features the artifacts expect
pub const FEATURE_COUNT: usize = 12;

/// Presentation column a field is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Left,
    Right,
}

/// Static description of one bounded numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Form and JSON key
    pub key: &'static str,
    /// Column name used when the artifacts were fitted
    pub column: &'static str,
    /// Human readable label
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Whether the control only accepts whole numbers
    pub integer: bool,
    pub group: FieldGroup,
}

impl FieldSpec {
    /// Whether `value` is a finite number inside `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }

    /// Force `value` into the range, rounding whole-number fields
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }

        let value = value.clamp(self.min, self.max);

        if self.integer { value.round() } else { value }
    }

    /// Render a value the way the control shows it
    pub fn format_value(&self, value: f64) -> String {
        if self.integer {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}

const fn whole(
    key: &'static str,
    column: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
) -> FieldSpec {
    FieldSpec {
        key,
        column,
        label,
        min,
        max,
        default,
        step: 1.0,
        integer: true,
        group: FieldGroup::Left,
    }
}

const fn measured(
    key: &'static str,
    column: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
    group: FieldGroup,
) -> FieldSpec {
    FieldSpec {
        key,
        column,
        label,
        min,
        max,
        default,
        step: 0.01,
        integer: false,
        group,
    }
}

/// Feature table in training order
pub static FIELDS: [FieldSpec; FEATURE_COUNT] = [
    whole("pregnancies", "No_Pation", "Number of pregnancies", 0.0, 20.0, 2.0),
    whole("sex", "Gender", "Sex (0 = female, 1 = male)", 0.0, 1.0, 0.0),
    whole("age", "AGE", "Age (years)", 10.0, 100.0, 35.0),
    measured("urea", "Urea", "Urea (mg/dL)", 0.0, 50.0, 4.0, FieldGroup::Left),
    measured("creatinine", "Cr", "Creatinine (mg/dL)", 0.0, 300.0, 60.0, FieldGroup::Left),
    measured("hba1c", "HbA1c", "HbA1c (%)", 0.0, 20.0, 6.0, FieldGroup::Left),
    measured("cholesterol", "Chol", "Cholesterol (mg/dL)", 0.0, 300.0, 4.0, FieldGroup::Right),
    measured("triglycerides", "TG", "Triglycerides (mg/dL)", 0.0, 400.0, 1.5, FieldGroup::Right),
    measured("hdl", "HDL", "HDL (mg/dL)", 0.0, 100.0, 1.0, FieldGroup::Right),
    measured("ldl", "LDL", "LDL (mg/dL)", 0.0, 200.0, 2.0, FieldGroup::Right),
    measured("vldl", "VLDL", "VLDL (mg/dL)", 0.0, 100.0, 0.5, FieldGroup::Right),
    measured("bmi", "BMI", "BMI (kg/m²)", 10.0, 50.0, 25.0, FieldGroup::Right),
];

/// Training column names in order
pub fn feature_columns() -> [&'static str; FEATURE_COUNT] {
    FIELDS.map(|field| field.column)
}

/// Look up a field by its form key
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|field| field.key == key)
}

/// One submission's worth of measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedicalInputRecord {
    pub pregnancies: f64,
    pub sex: f64,
    pub age: f64,
    pub urea: f64,
    pub creatinine: f64,
    pub hba1c: f64,
    pub cholesterol: f64,
    pub triglycerides: f64,
    pub hdl: f64,
    pub ldl: f64,
    pub vldl: f64,
    pub bmi: f64,
}

impl MedicalInputRecord {
    /// Build a record from values in training order
    pub fn from_row(row: [f64; FEATURE_COUNT]) -> Self {
        let [
            pregnancies,
            sex,
            age,
            urea,
            creatinine,
            hba1c,
            cholesterol,
            triglycerides,
            hdl,
            ldl,
            vldl,
            bmi,
        ] = row;

        Self {
            pregnancies,
            sex,
            age,
            urea,
            creatinine,
            hba1c,
            cholesterol,
            triglycerides,
            hdl,
            ldl,
            vldl,
            bmi,
        }
    }

    /// Values in training order, pregnancies first and BMI last
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pregnancies,
            self.sex,
            self.age,
            self.urea,
            self.creatinine,
            self.hba1c,
            self.cholesterol,
            self.triglycerides,
            self.hdl,
            self.ldl,
            self.vldl,
            self.bmi,
        ]
    }

    /// Every field at its lower bound
    pub fn minimum() -> Self {
        Self::from_row(FIELDS.map(|field| field.min))
    }

    /// Every field at its upper bound
    pub fn maximum() -> Self {
        Self::from_row(FIELDS.map(|field| field.max))
    }

    /// Copy with every value forced into its declared range
    pub fn clamped(&self) -> Self {
        let mut row = self.to_row();

        for (value, field) in row.iter_mut().zip(FIELDS.iter()) {
            *value = field.clamp(*value);
        }

        Self::from_row(row)
    }

    /// Pairs of field spec and value, in training order
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, f64)> {
        FIELDS.iter().zip(self.to_row())
    }
}

impl Default for MedicalInputRecord {
    fn default() -> Self {
        Self::from_row(FIELDS.map(|field| field.default))
    }
}
