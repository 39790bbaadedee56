use crate::ml::BinaryClassifier;
use crate::ml::logreg::sigmoid;

use super::TrainOptions;

/// Single-split decision stump used as a weak learner.
#[derive(Debug, Clone)]
pub struct Stump {
    /// Coordinate axis used for the split (0 = x, 1 = y).
    pub feature_index: u8,
    /// Threshold in data units.
    pub threshold: f32,
    /// Contribution for `feature <= threshold`.
    pub left_value: f32,
    /// Contribution for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    /// Contribution of this stump for one point.
    pub fn predict(&self, point: [f32; 2]) -> f32 {
        let value = point[usize::from(self.feature_index).min(1)];
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Additive stump ensemble over the class-1 log-odds.
#[derive(Debug, Clone)]
pub struct BoostedStumpsModel {
    /// Learning rate applied to each stump contribution.
    pub learning_rate: f32,
    /// Prior log-odds before any boosting round.
    pub init_raw: f32,
    pub stumps: Vec<Stump>,
    options: TrainOptions,
}

impl BoostedStumpsModel {
    /// Untrained ensemble; predicts the neutral prior everywhere.
    pub fn new(options: TrainOptions) -> Self {
        Self {
            learning_rate: options.learning_rate,
            init_raw: 0.0,
            stumps: Vec::new(),
            options,
        }
    }

    pub(super) fn with_rounds(
        learning_rate: f32,
        init_raw: f32,
        stumps: Vec<Stump>,
        options: TrainOptions,
    ) -> Self {
        Self {
            learning_rate,
            init_raw,
            stumps,
            options,
        }
    }

    /// Boosted log-odds for one point.
    pub fn predict_raw(&self, point: [f32; 2]) -> f32 {
        let mut raw = self.init_raw;
        for stump in &self.stumps {
            raw += self.learning_rate * stump.predict(point);
        }
        raw
    }

    /// Class-1 probability for one point.
    pub fn probability(&self, point: [f32; 2]) -> f32 {
        sigmoid(self.predict_raw(point))
    }
}

impl Default for BoostedStumpsModel {
    fn default() -> Self {
        Self::new(TrainOptions::default())
    }
}

impl BinaryClassifier for BoostedStumpsModel {
    fn fit(&mut self, x: &[[f32; 2]], y: &[u8]) -> Result<(), String> {
        let options = self.options.clone();
        *self = super::train_boosted_stumps(x, y, &options)?;
        Ok(())
    }

    fn predict_proba(&self, x: &[[f32; 2]]) -> Option<Vec<f32>> {
        Some(x.iter().map(|&point| self.probability(point)).collect())
    }

    fn predict(&self, x: &[[f32; 2]]) -> Vec<u8> {
        x.iter()
            .map(|&point| u8::from(self.predict_raw(point) > 0.0))
            .collect()
    }
}
