//! Linear support vector machine trained with hinge-loss SGD.
//!
//! This family produces hard labels only; the registry broadcasts them as
//! 0.0/1.0 probabilities for the field sampler.

mod train;
pub use train::{TrainOptions, train_linear_svm};

use crate::ml::BinaryClassifier;

/// Maximum-margin linear separator over standardized coordinates.
#[derive(Debug, Clone)]
pub struct LinearSvmModel {
    pub weights: [f32; 2],
    pub bias: f32,
    pub feature_mean: [f32; 2],
    pub feature_std: [f32; 2],
    options: TrainOptions,
}

impl LinearSvmModel {
    /// Untrained model with zero weights; predicts class 0 everywhere.
    pub fn new(options: TrainOptions) -> Self {
        Self {
            weights: [0.0; 2],
            bias: 0.0,
            feature_mean: [0.0; 2],
            feature_std: [1.0; 2],
            options,
        }
    }

    /// Signed margin for one point; positive favors class 1.
    pub fn margin(&self, point: [f32; 2]) -> f32 {
        let mut sum = self.bias;
        for i in 0..2 {
            let std = self.feature_std[i].max(1e-6);
            sum += self.weights[i] * (point[i] - self.feature_mean[i]) / std;
        }
        sum
    }
}

impl Default for LinearSvmModel {
    fn default() -> Self {
        Self::new(TrainOptions::default())
    }
}

impl BinaryClassifier for LinearSvmModel {
    fn fit(&mut self, x: &[[f32; 2]], y: &[u8]) -> Result<(), String> {
        let options = self.options.clone();
        *self = train_linear_svm(x, y, &options)?;
        Ok(())
    }

    fn predict_proba(&self, _x: &[[f32; 2]]) -> Option<Vec<f32>> {
        None
    }

    fn predict(&self, x: &[[f32; 2]]) -> Vec<u8> {
        x.iter()
            .map(|&point| u8::from(self.margin(point) > 0.0))
            .collect()
    }
}
