//! Infrastructure layer - artifact files, logging and metrics

pub mod artifact;
pub mod logging;
pub mod observability;
