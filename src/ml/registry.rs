//! Named set of interchangeable binary classifiers with one active at a
//! time.

use thiserror::Error;

use super::BinaryClassifier;
use crate::dataset::Label;

/// Errors surfaced at the registry boundary.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested name was never registered. Registry misuse; callers
    /// with a closed name set should never see this.
    #[error("Unknown classifier '{name}'")]
    UnknownClassifier { name: String },
    /// Training data does not contain at least one example of each class.
    #[error("Training data must contain both classes")]
    InsufficientClassDiversity,
    /// The active classifier's fit failed. Guarded against by the
    /// diversity check, so this indicates a classifier bug.
    #[error("Training failed: {0}")]
    TrainFailed(String),
}

/// One registered classifier.
struct ClassifierHandle {
    name: String,
    model: Box<dyn BinaryClassifier>,
}

/// Registry holding every classifier for the session.
///
/// Handles are created at startup and never destroyed; retraining re-fits
/// the active model in place.
pub struct ClassifierRegistry {
    entries: Vec<ClassifierHandle>,
    active: usize,
}

impl ClassifierRegistry {
    /// Create a registry with its first (and initially active) classifier.
    pub fn new(name: &str, model: Box<dyn BinaryClassifier>) -> Self {
        Self {
            entries: vec![ClassifierHandle {
                name: name.to_string(),
                model,
            }],
            active: 0,
        }
    }

    /// Register an additional classifier under a unique name.
    ///
    /// Re-registering an existing name replaces that model in place.
    pub fn register(&mut self, name: &str, model: Box<dyn BinaryClassifier>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.model = model;
            return;
        }
        self.entries.push(ClassifierHandle {
            name: name.to_string(),
            model,
        });
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Borrow a classifier by name.
    pub fn get(&self, name: &str) -> Result<&dyn BinaryClassifier, RegistryError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.model.as_ref())
            .ok_or_else(|| RegistryError::UnknownClassifier {
                name: name.to_string(),
            })
    }

    /// Name of the currently active classifier.
    pub fn active_name(&self) -> &str {
        &self.entries[self.active].name
    }

    /// Switch the active classifier without retraining it.
    pub fn set_active(&mut self, name: &str) -> Result<(), RegistryError> {
        let idx = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| RegistryError::UnknownClassifier {
                name: name.to_string(),
            })?;
        self.active = idx;
        Ok(())
    }

    /// Fit the active classifier on the given training set.
    ///
    /// The class-diversity check runs before fit so single-class data fails
    /// fast and leaves the model untouched.
    pub fn train_active(
        &mut self,
        points: &[[f64; 2]],
        labels: &[Label],
    ) -> Result<(), RegistryError> {
        let (x, y) = to_training_set(points, labels);
        ensure_class_diversity(&y)?;
        self.entries[self.active]
            .model
            .fit(&x, &y)
            .map_err(RegistryError::TrainFailed)
    }

    /// Fit every registered classifier on the given training set.
    pub fn train_all(&mut self, points: &[[f64; 2]], labels: &[Label]) -> Result<(), RegistryError> {
        let (x, y) = to_training_set(points, labels);
        ensure_class_diversity(&y)?;
        for entry in &mut self.entries {
            entry.model.fit(&x, &y).map_err(RegistryError::TrainFailed)?;
        }
        Ok(())
    }

    /// Class-1 probabilities for a batch of points from the active model.
    ///
    /// Families without probability estimates have their hard labels
    /// broadcast as 0.0/1.0, so downstream coloring stays
    /// classifier-agnostic.
    pub fn predict_field(&self, points: &[[f64; 2]]) -> Vec<f32> {
        let x: Vec<[f32; 2]> = points.iter().map(downcast_point).collect();
        let model = self.entries[self.active].model.as_ref();
        match model.predict_proba(&x) {
            Some(proba) => proba,
            None => model
                .predict(&x)
                .into_iter()
                .map(|label| label as f32)
                .collect(),
        }
    }
}

fn to_training_set(points: &[[f64; 2]], labels: &[Label]) -> (Vec<[f32; 2]>, Vec<u8>) {
    let x = points.iter().map(downcast_point).collect();
    let y = labels.iter().map(|label| label.index() as u8).collect();
    (x, y)
}

fn downcast_point(point: &[f64; 2]) -> [f32; 2] {
    [point[0] as f32, point[1] as f32]
}

fn ensure_class_diversity(y: &[u8]) -> Result<(), RegistryError> {
    let has_zero = y.iter().any(|&label| label == 0);
    let has_one = y.iter().any(|&label| label == 1);
    if has_zero && has_one {
        Ok(())
    } else {
        Err(RegistryError::InsufficientClassDiversity)
    }
}
