//! Predict command - diagnoses one record from command-line values

use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::api::types::DiagnoseResponse;
use crate::config::AppConfig;
use crate::domain::{DisplayText, MedicalInputRecord, present, validate_record};
use crate::infrastructure::logging::init_logging;

/// Arguments for the predict command; omitted values take the form defaults
#[derive(Args, Clone, Debug, Default)]
pub struct PredictArgs {
    /// Number of pregnancies [0, 20]
    #[arg(long)]
    pub pregnancies: Option<f64>,
    /// Sex, 0 = female, 1 = male
    #[arg(long)]
    pub sex: Option<f64>,
    /// Age in years [10, 100]
    #[arg(long)]
    pub age: Option<f64>,
    /// Urea in mg/dL [0, 50]
    #[arg(long)]
    pub urea: Option<f64>,
    /// Creatinine in mg/dL [0, 300]
    #[arg(long)]
    pub creatinine: Option<f64>,
    /// HbA1c in % [0, 20]
    #[arg(long)]
    pub hba1c: Option<f64>,
    /// Cholesterol in mg/dL [0, 300]
    #[arg(long)]
    pub cholesterol: Option<f64>,
    /// Triglycerides in mg/dL [0, 400]
    #[arg(long)]
    pub triglycerides: Option<f64>,
    /// HDL in mg/dL [0, 100]
    #[arg(long)]
    pub hdl: Option<f64>,
    /// LDL in mg/dL [0, 200]
    #[arg(long)]
    pub ldl: Option<f64>,
    /// VLDL in mg/dL [0, 100]
    #[arg(long)]
    pub vldl: Option<f64>,
    /// BMI in kg/m² [10, 50]
    #[arg(long)]
    pub bmi: Option<f64>,

    /// Scaler artifact (overrides config)
    #[arg(long)]
    pub scaler_path: Option<PathBuf>,
    /// Classifier artifact (overrides config)
    #[arg(long)]
    pub classifier_path: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    /// Record from the given values, defaults elsewhere
    pub fn record(&self) -> MedicalInputRecord {
        let given = [
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
        ];
        let mut row = MedicalInputRecord::default().to_row();

        for (value, given) in row.iter_mut().zip(given) {
            if let Some(given) = given {
                *value = given;
            }
        }

        MedicalInputRecord::from_row(row)
    }
}

pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (mut config, load_error) = AppConfig::load_or_default();
    init_logging(&config.logging);
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    if let Some(path) = &args.scaler_path {
        config.artifacts.scaler_path = path.clone();
    }
    if let Some(path) = &args.classifier_path {
        config.artifacts.classifier_path = path.clone();
    }

    let record = args.record();
    validate_record(&record)?;

    let state = crate::create_app_state(&config)?;
    let result = state.diagnose("cli", &record)?;

    if args.json {
        let response = DiagnoseResponse::new(record, &result);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_text(&present(&result)));
    }

    Ok(())
}

fn render_text(text: &DisplayText) -> String {
    format!(
        "Prediction Result: {}\nPrediction Probabilities: {}",
        text.verdict, text.probabilities
    )
}
