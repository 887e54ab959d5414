use super::{ModelError, Transformer, check_width};
use serde::{Deserialize, Serialize};

/// Standardizes each feature with the mean and scale learned at fit time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[typetag::serde]
impl Transformer for StandardScaler {
    fn name(&self) -> &'static str {
        "StandardScaler"
    }

    fn n_features_in(&self) -> usize {
        self.mean.len()
    }

    fn n_features_out(&self) -> usize {
        self.mean.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.mean.is_empty() {
            return Err(ModelError::invalid("StandardScaler has no features"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::invalid(format!(
                "StandardScaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(i) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(ModelError::invalid(format!(
                "StandardScaler mean[{}] is not finite",
                i
            )));
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ModelError::invalid(format!(
                "StandardScaler scale[{}] must be finite and non-zero",
                i
            )));
        }
        Ok(())
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_width(self.n_features_in(), row)?;
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
