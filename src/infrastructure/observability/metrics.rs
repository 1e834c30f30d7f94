//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;
use crate::domain::DiagnosisLabel;

/// Path label used for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Handle backed by a recorder that is not installed globally
    #[cfg(test)]
    pub(crate) fn unregistered(path: &str) -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();

        Self {
            handle: Arc::new(recorder.handle()),
            path: path.to_string(),
        }
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("diabetes_diagnosis_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
                path: config.path.clone(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path.clone();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: Option<&str>, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.unwrap_or(UNMATCHED_PATH).to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Outcome of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisOutcome {
    Success,
    Rejected,
    Failed,
}

impl DiagnosisOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// Record one submission and, when it produced one, its label
pub fn record_diagnosis(surface: &'static str, outcome: DiagnosisOutcome, label: Option<i64>) {
    counter!(
        "diagnosis_requests_total",
        "surface" => surface,
        "outcome" => outcome.as_str()
    )
    .increment(1);

    if let Some(label) = label {
        counter!("diagnosis_labels_total", "label" => label_name(label)).increment(1);
    }
}

/// Bounded label values for the label counter
fn label_name(label: i64) -> &'static str {
    match DiagnosisLabel::from_class(label) {
        Some(DiagnosisLabel::NoDiabetes) => "no_diabetes",
        Some(DiagnosisLabel::PossibleRisk) => "possible_risk",
        Some(DiagnosisLabel::Diabetes) => "diabetes",
        None => "unknown",
    }
}
