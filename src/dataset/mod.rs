//! Labeled 2-D point storage for a playground session.
//!
//! The dataset is split into an immutable base sequence loaded at startup
//! and an append-only user sequence grown by canvas clicks. Training always
//! sees base points first, then user points, in insertion order.

mod blobs;
mod stats;

pub use blobs::{BlobsOptions, generate_blobs};
pub use stats::{AxisSummary, DatasetSummary, summarize};

/// Binary class label attached to every point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Class 0.
    Zero,
    /// Class 1.
    One,
}

impl Label {
    /// Class index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    /// Regression target used by the classifiers (0.0 or 1.0).
    pub fn target(self) -> f32 {
        self.index() as f32
    }

    /// Threshold a class-1 probability at 0.5.
    pub fn from_probability(probability: f32) -> Self {
        if probability > 0.5 {
            Label::One
        } else {
            Label::Zero
        }
    }
}

/// A single labeled point in data space. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }

    /// Coordinates as a fixed-size pair.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Base plus user point sequences for one session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    base: Vec<LabeledPoint>,
    user: Vec<LabeledPoint>,
    dirty: bool,
}

impl Dataset {
    /// Create a dataset from the fixed base sequence.
    pub fn new(base: Vec<LabeledPoint>) -> Self {
        Self {
            base,
            user: Vec::new(),
            dirty: false,
        }
    }

    /// Points loaded at session start.
    pub fn base(&self) -> &[LabeledPoint] {
        &self.base
    }

    /// Points added during the session.
    pub fn user(&self) -> &[LabeledPoint] {
        &self.user
    }

    /// Total number of points (base plus user).
    pub fn len(&self) -> usize {
        self.base.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.user.is_empty()
    }

    /// Append a user point. Always succeeds and marks the dataset dirty.
    pub fn add_point(&mut self, x: f64, y: f64, label: Label) {
        self.user.push(LabeledPoint::new(x, y, label));
        self.dirty = true;
    }

    /// True when points were added since the last [`clear_dirty`](Self::clear_dirty).
    ///
    /// Consulted only at explicit retrain; a dirty dataset never triggers
    /// recomputation on its own.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge the pending additions, typically after a retrain.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Clear the user sequence, supporting a session restart.
    pub fn reset_user_points(&mut self) {
        self.user.clear();
        self.dirty = false;
    }

    /// Base and user points as parallel coordinate/label sequences.
    ///
    /// Rebuilt on every call; caching lives in the field sampler where the
    /// expensive work is.
    pub fn combined(&self) -> (Vec<[f64; 2]>, Vec<Label>) {
        let mut coords = Vec::with_capacity(self.len());
        let mut labels = Vec::with_capacity(self.len());
        for point in self.iter_all() {
            coords.push(point.coords());
            labels.push(point.label);
        }
        (coords, labels)
    }

    /// Iterate base points, then user points, in insertion order.
    pub fn iter_all(&self) -> impl Iterator<Item = &LabeledPoint> {
        self.base.iter().chain(self.user.iter())
    }
}
