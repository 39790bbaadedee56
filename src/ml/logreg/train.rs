use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};

use super::{LogRegModel, sigmoid};
use crate::ml::validate_training_set;

/// Training options for logistic regression.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub epochs: usize,
    pub learning_rate: f32,
    pub l2: f32,
    pub batch_size: usize,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 150,
            learning_rate: 0.3,
            l2: 1e-4,
            batch_size: 32,
            seed: 42,
        }
    }
}

/// Train a binary logistic regression with mini-batch SGD.
pub fn train_logreg(
    x: &[[f32; 2]],
    y: &[u8],
    options: &TrainOptions,
) -> Result<LogRegModel, String> {
    validate_training_set(x, y)?;

    let (mean, std) = feature_moments(x);
    let normalized: Vec<[f32; 2]> = x
        .iter()
        .map(|point| {
            [
                (point[0] - mean[0]) / std[0].max(1e-6),
                (point[1] - mean[1]) / std[1].max(1e-6),
            ]
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut weights = [
        (rng.random::<f32>() - 0.5) * 0.01,
        (rng.random::<f32>() - 0.5) * 0.01,
    ];
    let mut bias = 0.0f32;

    let mut indices: Vec<usize> = (0..normalized.len()).collect();
    let batch_size = options.batch_size.max(1);
    let lr = options.learning_rate;
    let l2 = options.l2.max(0.0);

    for _epoch in 0..options.epochs {
        indices.shuffle(&mut rng);
        for chunk in indices.chunks(batch_size) {
            let mut grad_w = [0.0f32; 2];
            let mut grad_b = 0.0f32;
            for &idx in chunk {
                let point = normalized[idx];
                let z = weights[0] * point[0] + weights[1] * point[1] + bias;
                let diff = sigmoid(z) - y[idx] as f32;
                grad_w[0] += diff * point[0];
                grad_w[1] += diff * point[1];
                grad_b += diff;
            }
            let inv = 1.0 / chunk.len() as f32;
            for i in 0..2 {
                weights[i] -= lr * (grad_w[i] * inv + l2 * weights[i]);
            }
            bias -= lr * grad_b * inv;
        }
    }

    Ok(LogRegModel {
        weights,
        bias,
        feature_mean: mean,
        feature_std: std,
        options: options.clone(),
    })
}

/// Per-feature mean and population standard deviation.
fn feature_moments(x: &[[f32; 2]]) -> ([f32; 2], [f32; 2]) {
    let n = x.len() as f32;
    let mut mean = [0.0f32; 2];
    for point in x {
        mean[0] += point[0];
        mean[1] += point[1];
    }
    mean[0] /= n;
    mean[1] /= n;

    let mut variance = [0.0f32; 2];
    for point in x {
        variance[0] += (point[0] - mean[0]).powi(2);
        variance[1] += (point[1] - mean[1]).powi(2);
    }
    let std = [(variance[0] / n).sqrt(), (variance[1] / n).sqrt()];
    (mean, std)
}
