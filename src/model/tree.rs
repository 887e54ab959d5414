use super::{Classifier, Label, ModelError, check_width};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Rows with `x[feature] <= threshold` continue at `left`, the rest at `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// One weight per class, usually the training sample counts.
    Leaf { value: Vec<f64> },
}

/// A fitted binary decision tree stored as a flat node array with the root at
/// index 0. Children always sit after their parent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecisionTreeClassifier {
    pub n_features: usize,
    pub classes: Vec<Label>,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTreeClassifier {
    fn predict_row(&self, row: &[f64]) -> Result<&Label, ModelError> {
        check_width(self.n_features, row)?;
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => return Ok(&self.classes[argmax(value)]),
            }
        }
    }
}

/// Index of the largest weight, the first one on ties.
fn argmax(value: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in value.iter().enumerate().skip(1) {
        if *v > value[best] {
            best = i;
        }
    }
    best
}

#[typetag::serde]
impl Classifier for DecisionTreeClassifier {
    fn name(&self) -> &'static str {
        "DecisionTreeClassifier"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classes(&self) -> &[Label] {
        &self.classes
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 {
            return Err(ModelError::invalid("Decision tree has no input features"));
        }
        if self.classes.is_empty() {
            return Err(ModelError::invalid("Decision tree has no classes"));
        }
        if self.nodes.is_empty() {
            return Err(ModelError::invalid("Decision tree has no nodes"));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= self.n_features {
                        return Err(ModelError::invalid(format!(
                            "Node {} splits on feature {} but the tree has {} features",
                            i, feature, self.n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::invalid(format!(
                            "Node {} has a non-finite threshold",
                            i
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(ModelError::invalid(format!(
                                "Node {} points to child {} outside ({}, {})",
                                i,
                                child,
                                i,
                                self.nodes.len()
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != self.classes.len() {
                        return Err(ModelError::invalid(format!(
                            "Leaf {} has {} class weights, expected {}",
                            i,
                            value.len(),
                            self.classes.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<Label>, ModelError> {
        batch
            .iter()
            .map(|row| self.predict_row(row).cloned())
            .collect()
    }
}
