//! Model artifacts and inference.
//!
//! An artifact is a JSON document of typed components. Each component carries a
//! `"type"` tag resolved through `typetag`, so a pipeline can nest any registered
//! transformer and classifier without the loader knowing the concrete types.

pub mod label;
pub mod pipeline;
pub mod scaler;
pub mod tree;

pub use label::Label;
pub use pipeline::Pipeline;
pub use scaler::StandardScaler;
pub use tree::{DecisionTreeClassifier, TreeNode};

use log::info;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed model artifact {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid model: {reason}")]
    Invalid { reason: String },

    #[error("Model expects {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Model returned no prediction")]
    EmptyPrediction,
}

impl ModelError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ModelError::Invalid {
            reason: reason.into(),
        }
    }
}

/// A fitted classifier. Implementations are immutable after load and shared
/// across request workers.
#[typetag::serde(tag = "type")]
pub trait Classifier: Debug + Send + Sync {
    /// Component name as written in the artifact's `"type"` tag.
    fn name(&self) -> &'static str;

    /// Width of the rows accepted by `predict`.
    fn n_features(&self) -> usize;

    fn classes(&self) -> &[Label];

    /// Structural checks run once at load time. `predict` may assume they hold.
    fn validate(&self) -> Result<(), ModelError>;

    /// Predicts one label per row of `batch`.
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<Label>, ModelError>;
}

/// A fitted preprocessing step applied row by row before the classifier.
#[typetag::serde(tag = "type")]
pub trait Transformer: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn n_features_in(&self) -> usize;

    fn n_features_out(&self) -> usize;

    fn validate(&self) -> Result<(), ModelError>;

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Reads, deserializes and validates the artifact at `path`.
pub fn load_model(path: impl AsRef<Path>) -> Result<Box<dyn Classifier>, ModelError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model: Box<dyn Classifier> =
        serde_json::from_slice(&bytes).map_err(|source| ModelError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    model.validate()?;

    let classes = model
        .classes()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    info!(
        "Loaded {} from {} ({} features, classes: {})",
        model.name(),
        path.display(),
        model.n_features(),
        classes.join(", ")
    );
    Ok(model)
}

pub(crate) fn check_width(expected: usize, row: &[f64]) -> Result<(), ModelError> {
    if row.len() != expected {
        return Err(ModelError::FeatureMismatch {
            expected,
            actual: row.len(),
        });
    }
    Ok(())
}
