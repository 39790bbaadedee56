use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};

use super::LinearSvmModel;
use crate::ml::validate_training_set;

/// Training options for the linear SVM.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub epochs: usize,
    /// Regularization strength; the SGD step size decays as `1 / (lambda * t)`.
    pub lambda: f32,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 120,
            lambda: 1e-3,
            seed: 42,
        }
    }
}

/// Train a linear SVM with Pegasos-style stochastic subgradient descent.
pub fn train_linear_svm(
    x: &[[f32; 2]],
    y: &[u8],
    options: &TrainOptions,
) -> Result<LinearSvmModel, String> {
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
    // Hinge-loss targets in {-1, +1}.
    let targets: Vec<f32> = y.iter().map(|&label| label as f32 * 2.0 - 1.0).collect();

    let mut rng = StdRng::seed_from_u64(options.seed);
    // Bias rides along as a constant-one feature so a single regularized
    // update covers the whole parameter vector.
    let mut w = [0.0f32; 3];
    let lambda = options.lambda.max(1e-9);

    let mut indices: Vec<usize> = (0..normalized.len()).collect();
    let mut t = 0usize;
    for _epoch in 0..options.epochs {
        indices.shuffle(&mut rng);
        for &idx in &indices {
            t += 1;
            let eta = 1.0 / (lambda * t as f32);
            let point = normalized[idx];
            let target = targets[idx];
            let margin = target * (w[0] * point[0] + w[1] * point[1] + w[2]);
            let shrink = (1.0 - eta * lambda).max(0.0);
            for wi in &mut w {
                *wi *= shrink;
            }
            if margin < 1.0 {
                w[0] += eta * target * point[0];
                w[1] += eta * target * point[1];
                w[2] += eta * target;
            }
        }
    }

    Ok(LinearSvmModel {
        weights: [w[0], w[1]],
        bias: w[2],
        feature_mean: mean,
        feature_std: std,
        options: options.clone(),
    })
}

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::BinaryClassifier;

    fn separable_set() -> (Vec<[f32; 2]>, Vec<u8>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for i in 0..15 {
            let jitter = (i as f32) * 0.05;
            x.push([-2.0 - jitter, -1.0 + jitter]);
            y.push(0);
            x.push([2.0 + jitter, 1.0 - jitter]);
            y.push(1);
        }
        (x, y)
    }

    #[test]
    fn rejects_label_outside_binary_range() {
        let err = train_linear_svm(&[[0.0, 0.0]], &[2], &TrainOptions::default());
        assert!(err.is_err());
    }

    #[test]
    fn separates_two_distant_clusters() {
        let (x, y) = separable_set();
        let model = train_linear_svm(&x, &y, &TrainOptions::default()).unwrap();
        assert_eq!(model.predict(&x), y);
    }

    #[test]
    fn training_is_deterministic_for_a_seed() {
        let (x, y) = separable_set();
        let a = train_linear_svm(&x, &y, &TrainOptions::default()).unwrap();
        let b = train_linear_svm(&x, &y, &TrainOptions::default()).unwrap();
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.bias, b.bias);
    }
}
