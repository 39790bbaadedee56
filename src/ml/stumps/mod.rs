//! Gradient-boosted decision stumps for 2-D binary classification.

mod model;
mod train;

pub use model::{BoostedStumpsModel, Stump};
pub use train::{TrainOptions, train_boosted_stumps};
