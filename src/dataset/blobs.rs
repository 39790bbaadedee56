//! Seeded synthetic two-cluster dataset generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};

use super::{Label, LabeledPoint};

/// Half-extent of the square region cluster centers are drawn from.
const CENTER_RANGE: f64 = 8.0;

/// Parameters for the synthetic base dataset.
#[derive(Debug, Clone)]
pub struct BlobsOptions {
    /// Total number of points, split evenly between the two classes.
    pub samples: usize,
    /// Standard deviation of each isotropic Gaussian cluster.
    pub cluster_std: f64,
    /// RNG seed; equal seeds yield identical datasets.
    pub seed: u64,
}

impl Default for BlobsOptions {
    fn default() -> Self {
        Self {
            samples: 200,
            cluster_std: 1.5,
            seed: 42,
        }
    }
}

/// Generate two Gaussian clusters, one per class, shuffled into a single
/// sequence.
pub fn generate_blobs(options: &BlobsOptions) -> Vec<LabeledPoint> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let centers = [draw_center(&mut rng), draw_center(&mut rng)];

    let mut points = Vec::with_capacity(options.samples);
    for (class_idx, label) in [Label::Zero, Label::One].into_iter().enumerate() {
        // The first cluster absorbs the odd point when samples is odd.
        let count = options.samples / 2 + if class_idx == 0 { options.samples % 2 } else { 0 };
        let [cx, cy] = centers[class_idx];
        for _ in 0..count {
            let x = cx + options.cluster_std * sample_standard_normal(&mut rng);
            let y = cy + options.cluster_std * sample_standard_normal(&mut rng);
            points.push(LabeledPoint::new(x, y, label));
        }
    }
    points.shuffle(&mut rng);
    points
}

fn draw_center(rng: &mut StdRng) -> [f64; 2] {
    [
        rng.random_range(-CENTER_RANGE..CENTER_RANGE),
        rng.random_range(-CENTER_RANGE..CENTER_RANGE),
    ]
}

/// Box-Muller transform over the RNG's uniform output.
fn sample_standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
