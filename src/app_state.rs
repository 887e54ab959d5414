use crate::config::ServerConfig;
use crate::io_struct::{FEATURE_COUNT, IrisInput};
use crate::model::{Classifier, Label, ModelError, load_model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide state shared by every request. Built once before the server
/// starts and never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    model: Box<dyn Classifier>,
    model_path: PathBuf,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub model_type: String,
    pub n_features: usize,
    pub feature_names: Vec<String>,
    pub classes: Vec<String>,
    pub loaded_at: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ModelError> {
        let model = load_model(&config.model_path)?;
        Self::from_model(model, config.model_path.clone())
    }

    /// Wraps an already deserialized model, checking it accepts iris measurements.
    pub fn from_model(
        model: Box<dyn Classifier>,
        model_path: impl Into<PathBuf>,
    ) -> Result<Self, ModelError> {
        model.validate()?;
        if model.n_features() != FEATURE_COUNT {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_COUNT,
                actual: model.n_features(),
            });
        }
        Ok(Self {
            model,
            model_path: model_path.into(),
            loaded_at: Utc::now(),
        })
    }

    /// Runs the model on a single-row batch and returns the only label.
    pub fn predict(&self, input: &IrisInput) -> Result<Label, ModelError> {
        let batch = vec![input.to_feature_vector().to_vec()];
        self.model
            .predict(&batch)?
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyPrediction)
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_path: self.model_path.display().to_string(),
            model_type: self.model.name().to_string(),
            n_features: self.model.n_features(),
            feature_names: IrisInput::FIELDS.iter().map(|f| f.to_string()).collect(),
            classes: self.model.classes().iter().map(|c| c.to_string()).collect(),
            loaded_at: self.loaded_at.to_rfc3339(),
        }
    }
}
