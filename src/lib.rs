//! Diabetes Diagnosis
//!
//! Twelve routine measurements in, one of three risk classes out:
//! - Pre-trained scaler and linear classifier loaded from JSON artifacts
//! - Server-rendered HTML form and a JSON API over the same pipeline
//! - One-shot CLI prediction

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;

use api::state::AppState;
use infrastructure::artifact::ArtifactLoader;

/// Load the artifacts named in `config` and wrap them in shared state.
///
/// Fails when either artifact is missing, malformed or incompatible; callers
/// treat that as fatal.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let context = ArtifactLoader::load(&config.artifacts)?;

    Ok(AppState::new(context))
}
