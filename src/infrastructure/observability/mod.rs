//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use self::config::MetricsConfig;
pub use self::metrics::{
    DiagnosisOutcome, PrometheusMetrics, create_metrics_router, init_metrics, record_diagnosis,
    record_http_request,
};
