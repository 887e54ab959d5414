use super::{Classifier, Label, ModelError, Transformer};
use serde::{Deserialize, Serialize};

/// Preprocessing steps followed by a final classifier.
#[derive(Debug, Deserialize, Serialize)]
pub struct Pipeline {
    #[serde(default)]
    pub steps: Vec<Box<dyn Transformer>>,
    pub estimator: Box<dyn Classifier>,
}

#[typetag::serde]
impl Classifier for Pipeline {
    fn name(&self) -> &'static str {
        "Pipeline"
    }

    fn n_features(&self) -> usize {
        match self.steps.first() {
            Some(step) => step.n_features_in(),
            None => self.estimator.n_features(),
        }
    }

    fn classes(&self) -> &[Label] {
        self.estimator.classes()
    }

    fn validate(&self) -> Result<(), ModelError> {
        for step in &self.steps {
            step.validate()?;
        }
        self.estimator.validate()?;

        let widths = self
            .steps
            .iter()
            .map(|s| (s.name(), s.n_features_in(), s.n_features_out()));
        let mut previous: Option<(&str, usize)> = None;
        for (name, width_in, width_out) in widths {
            if let Some((prev_name, prev_out)) = previous {
                if prev_out != width_in {
                    return Err(ModelError::invalid(format!(
                        "{} outputs {} features but the following {} expects {}",
                        prev_name, prev_out, name, width_in
                    )));
                }
            }
            previous = Some((name, width_out));
        }
        if let Some((prev_name, prev_out)) = previous {
            if prev_out != self.estimator.n_features() {
                return Err(ModelError::invalid(format!(
                    "{} outputs {} features but {} expects {}",
                    prev_name,
                    prev_out,
                    self.estimator.name(),
                    self.estimator.n_features()
                )));
            }
        }
        Ok(())
    }

    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<Label>, ModelError> {
        let transformed = batch
            .iter()
            .map(|row| {
                self.steps
                    .iter()
                    .try_fold(row.clone(), |acc, step| step.transform(&acc))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.estimator.predict(&transformed)
    }
}
