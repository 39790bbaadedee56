//! Binary classifiers behind a shared capability interface, plus the
//! registry that owns and trains them.

pub mod logreg;
pub mod registry;
pub mod stumps;
pub mod svm;

pub use registry::{ClassifierRegistry, RegistryError};

/// Capability interface implemented by every classifier family.
///
/// Inputs are parallel feature/label slices; labels are class indices 0/1.
/// Training errors are plain strings, wrapped into a typed error at the
/// registry boundary.
pub trait BinaryClassifier {
    /// Fit the model in place on the full training set.
    fn fit(&mut self, x: &[[f32; 2]], y: &[u8]) -> Result<(), String>;

    /// Batched class-1 probabilities, or `None` when the family does not
    /// estimate probabilities.
    fn predict_proba(&self, x: &[[f32; 2]]) -> Option<Vec<f32>>;

    /// Batched hard 0/1 class predictions.
    fn predict(&self, x: &[[f32; 2]]) -> Vec<u8>;
}

/// Validate parallel training slices shared by all families.
pub(crate) fn validate_training_set(x: &[[f32; 2]], y: &[u8]) -> Result<(), String> {
    if x.is_empty() || y.is_empty() {
        return Err("Empty training set".to_string());
    }
    if x.len() != y.len() {
        return Err("Mismatched training inputs/labels".to_string());
    }
    if let Some(label) = y.iter().find(|&&label| label > 1) {
        return Err(format!("Label {label} outside the binary range"));
    }
    Ok(())
}
