//! Pre-trained artifact formats and loading

mod classifier;
mod loader;
mod scaler;

pub use classifier::{ClassifierArtifact, LinearClassifier, MultiClass};
pub use loader::ArtifactLoader;
pub use scaler::{MinMaxScaler, ScalerArtifact, StandardScaler};
