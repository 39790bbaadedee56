use super::model::{BoostedStumpsModel, Stump};
use crate::ml::logreg::sigmoid;
use crate::ml::validate_training_set;

/// Training hyperparameters for stump boosting.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Number of boosting rounds (one stump per round).
    pub rounds: usize,
    /// Learning rate applied per round.
    pub learning_rate: f32,
    /// Number of bins used for split search.
    pub bins: usize,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            rounds: 200,
            learning_rate: 0.1,
            bins: 64,
        }
    }
}

/// Train a binary stump ensemble with logistic gradient boosting.
pub fn train_boosted_stumps(
    x: &[[f32; 2]],
    y: &[u8],
    options: &TrainOptions,
) -> Result<BoostedStumpsModel, String> {
    validate_training_set(x, y)?;

    let n = x.len();
    let (mins, maxs) = feature_min_max(x);
    let bins = options.bins.clamp(2, 256);
    let binned = bin_features(x, &mins, &maxs, bins);

    let positive = y.iter().filter(|&&label| label == 1).count() as f32;
    let prior = (positive / n as f32).clamp(1e-6, 1.0 - 1e-6);
    let init_raw = (prior / (1.0 - prior)).ln();
    let mut raw = vec![init_raw; n];

    let mut stumps = Vec::with_capacity(options.rounds);
    for _round in 0..options.rounds {
        let residuals: Vec<f32> = raw
            .iter()
            .zip(y)
            .map(|(&r, &label)| label as f32 - sigmoid(r))
            .collect();

        let mut best = BestSplit::default();
        for feature_idx in 0..2 {
            let split = best_split_for_feature(&binned, &residuals, feature_idx, bins);
            if split.score < best.score {
                best = split;
            }
        }

        let threshold = threshold_for_bin(
            mins[best.feature_index],
            maxs[best.feature_index],
            best.split_bin,
            bins,
        );
        let (left_value, right_value) =
            leaf_means_for_threshold(x, &residuals, best.feature_index, threshold);
        let stump = Stump {
            feature_index: best.feature_index as u8,
            threshold,
            left_value,
            right_value,
        };
        for i in 0..n {
            raw[i] += options.learning_rate * stump.predict(x[i]);
        }
        stumps.push(stump);
    }

    Ok(BoostedStumpsModel::with_rounds(
        options.learning_rate,
        init_raw,
        stumps,
        options.clone(),
    ))
}

fn feature_min_max(x: &[[f32; 2]]) -> ([f32; 2], [f32; 2]) {
    let mut mins = [f32::INFINITY; 2];
    let mut maxs = [f32::NEG_INFINITY; 2];
    for point in x {
        for j in 0..2 {
            if point[j].is_finite() {
                mins[j] = mins[j].min(point[j]);
                maxs[j] = maxs[j].max(point[j]);
            }
        }
    }
    for j in 0..2 {
        if !mins[j].is_finite() || !maxs[j].is_finite() {
            mins[j] = 0.0;
            maxs[j] = 0.0;
        }
        if mins[j] == maxs[j] {
            maxs[j] = mins[j] + 1.0;
        }
    }
    (mins, maxs)
}

fn bin_features(x: &[[f32; 2]], mins: &[f32; 2], maxs: &[f32; 2], bins: usize) -> Vec<[u8; 2]> {
    let bins_f = bins as f32;
    x.iter()
        .map(|point| {
            let mut binned = [0u8; 2];
            for j in 0..2 {
                let t = ((point[j] - mins[j]) / (maxs[j] - mins[j])).clamp(0.0, 1.0);
                binned[j] = (t * (bins_f - 1.0)).round() as u8;
            }
            binned
        })
        .collect()
}

#[derive(Debug, Clone)]
struct BestSplit {
    score: f64,
    feature_index: usize,
    split_bin: usize,
}

impl Default for BestSplit {
    fn default() -> Self {
        Self {
            score: f64::INFINITY,
            feature_index: 0,
            split_bin: 0,
        }
    }
}

fn best_split_for_feature(
    binned: &[[u8; 2]],
    residuals: &[f32],
    feature_idx: usize,
    bins: usize,
) -> BestSplit {
    let mut counts = vec![0u32; bins];
    let mut sums = vec![0f64; bins];
    let mut sums_sq = vec![0f64; bins];
    for (row, &residual) in binned.iter().zip(residuals) {
        let b = row[feature_idx] as usize;
        let r = residual as f64;
        counts[b] += 1;
        sums[b] += r;
        sums_sq[b] += r * r;
    }
    let total_count: u32 = counts.iter().sum();
    if total_count == 0 {
        return BestSplit::default();
    }
    let total_sum: f64 = sums.iter().sum();
    let total_sum_sq: f64 = sums_sq.iter().sum();

    let mut best_score = f64::INFINITY;
    let mut best_bin = 0usize;

    let mut left_count = 0u32;
    let mut left_sum = 0f64;
    let mut left_sum_sq = 0f64;

    for split_bin in 0..(bins - 1) {
        left_count += counts[split_bin];
        left_sum += sums[split_bin];
        left_sum_sq += sums_sq[split_bin];
        let right_count = total_count - left_count;
        if left_count == 0 || right_count == 0 {
            continue;
        }
        let right_sum = total_sum - left_sum;
        let right_sum_sq = total_sum_sq - left_sum_sq;
        let left_sse = left_sum_sq - (left_sum * left_sum) / left_count as f64;
        let right_sse = right_sum_sq - (right_sum * right_sum) / right_count as f64;
        let score = left_sse + right_sse;
        if score < best_score {
            best_score = score;
            best_bin = split_bin;
        }
    }

    BestSplit {
        score: best_score,
        feature_index: feature_idx,
        split_bin: best_bin,
    }
}

fn threshold_for_bin(min: f32, max: f32, split_bin: usize, bins: usize) -> f32 {
    let t = ((split_bin + 1) as f32) / bins as f32;
    min + t * (max - min)
}

fn leaf_means_for_threshold(
    x: &[[f32; 2]],
    residuals: &[f32],
    feature_idx: usize,
    threshold: f32,
) -> (f32, f32) {
    let mut left_sum = 0.0f32;
    let mut left_count = 0u32;
    let mut right_sum = 0.0f32;
    let mut right_count = 0u32;
    for (point, &residual) in x.iter().zip(residuals) {
        if point[feature_idx] <= threshold {
            left_sum += residual;
            left_count += 1;
        } else {
            right_sum += residual;
            right_count += 1;
        }
    }
    let left_mean = if left_count == 0 {
        0.0
    } else {
        left_sum / left_count as f32
    };
    let right_mean = if right_count == 0 {
        0.0
    } else {
        right_sum / right_count as f32
    };
    (left_mean, right_mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::BinaryClassifier;

    fn axis_separable_set() -> (Vec<[f32; 2]>, Vec<u8>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for i in 0..12 {
            let jitter = (i as f32) * 0.07;
            x.push([-3.0 - jitter, jitter - 0.5]);
            y.push(0);
            x.push([3.0 + jitter, 0.5 - jitter]);
            y.push(1);
        }
        (x, y)
    }

    #[test]
    fn rejects_empty_training_set() {
        assert!(train_boosted_stumps(&[], &[], &TrainOptions::default()).is_err());
    }

    #[test]
    fn fits_an_axis_separable_set_exactly() {
        let (x, y) = axis_separable_set();
        let model = train_boosted_stumps(&x, &y, &TrainOptions::default()).unwrap();
        assert_eq!(model.predict(&x), y);
    }

    #[test]
    fn probabilities_move_away_from_the_prior() {
        let (x, y) = axis_separable_set();
        let model = train_boosted_stumps(&x, &y, &TrainOptions::default()).unwrap();
        assert!(model.probability([-3.5, 0.0]) < 0.2);
        assert!(model.probability([3.5, 0.0]) > 0.8);
    }

    #[test]
    fn unbalanced_prior_shifts_init_raw() {
        let x = vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 1.0]];
        let y = vec![0, 0, 0, 1];
        let model = train_boosted_stumps(
            &x,
            &y,
            &TrainOptions {
                rounds: 0,
                ..TrainOptions::default()
            },
        )
        .unwrap();
        assert!(model.init_raw < 0.0);
        assert!(model.probability([0.0, 0.0]) < 0.5);
    }
}
