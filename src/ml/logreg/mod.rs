//! Binary logistic regression on 2-D coordinates.

use crate::ml::BinaryClassifier;

mod train;
pub use train::{TrainOptions, train_logreg};

/// Logistic regression over standardized coordinates.
///
/// Features are normalized with the training-set mean and standard
/// deviation stored alongside the weights, so the SGD step size stays
/// well-behaved regardless of the data's coordinate range.
#[derive(Debug, Clone)]
pub struct LogRegModel {
    pub weights: [f32; 2],
    pub bias: f32,
    pub feature_mean: [f32; 2],
    pub feature_std: [f32; 2],
    options: TrainOptions,
}

impl LogRegModel {
    /// Untrained model with zero weights; predicts 0.5 everywhere.
    pub fn new(options: TrainOptions) -> Self {
        Self {
            weights: [0.0; 2],
            bias: 0.0,
            feature_mean: [0.0; 2],
            feature_std: [1.0; 2],
            options,
        }
    }

    /// Raw decision value for one point; positive favors class 1.
    pub fn decision(&self, point: [f32; 2]) -> f32 {
        let mut sum = self.bias;
        for i in 0..2 {
            let std = self.feature_std[i].max(1e-6);
            sum += self.weights[i] * (point[i] - self.feature_mean[i]) / std;
        }
        sum
    }

    /// Class-1 probability for one point.
    pub fn probability(&self, point: [f32; 2]) -> f32 {
        sigmoid(self.decision(point))
    }
}

impl Default for LogRegModel {
    fn default() -> Self {
        Self::new(TrainOptions::default())
    }
}

impl BinaryClassifier for LogRegModel {
    fn fit(&mut self, x: &[[f32; 2]], y: &[u8]) -> Result<(), String> {
        let options = self.options.clone();
        *self = train_logreg(x, y, &options)?;
        Ok(())
    }

    fn predict_proba(&self, x: &[[f32; 2]]) -> Option<Vec<f32>> {
        Some(x.iter().map(|&point| self.probability(point)).collect())
    }

    fn predict(&self, x: &[[f32; 2]]) -> Vec<u8> {
        x.iter()
            .map(|&point| u8::from(self.probability(point) > 0.5))
            .collect()
    }
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f32) -> f32 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
