//! Separable Gaussian blur over a color field.

use super::ColorField;

/// Blur the field in place with an isotropic Gaussian of the given sigma
/// (in grid cells). Softens the hard cell edges at the decision boundary
/// before the field is upscaled. A non-positive sigma is a no-op.
pub fn gaussian_blur(field: &mut ColorField, sigma: f32) {
    if sigma <= 0.0 {
        return;
    }
    let kernel = build_kernel(sigma);
    let resolution = field.resolution();

    // Horizontal pass, then vertical, over a scratch copy.
    let mut scratch = vec![[0.0f32; 3]; resolution * resolution];
    for iy in 0..resolution {
        for ix in 0..resolution {
            scratch[iy * resolution + ix] =
                convolve(field, &kernel, ix, iy, resolution, Axis::X);
        }
    }
    field.data_mut().copy_from_slice(&scratch);
    for iy in 0..resolution {
        for ix in 0..resolution {
            scratch[iy * resolution + ix] =
                convolve(field, &kernel, ix, iy, resolution, Axis::Y);
        }
    }
    field.data_mut().copy_from_slice(&scratch);
}

enum Axis {
    X,
    Y,
}

/// Normalized one-dimensional kernel truncated at three sigmas.
fn build_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil().max(1.0) as i64;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|offset| (-(offset * offset) as f32 / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

fn convolve(
    field: &ColorField,
    kernel: &[f32],
    ix: usize,
    iy: usize,
    resolution: usize,
    axis: Axis,
) -> [f32; 3] {
    let radius = (kernel.len() / 2) as i64;
    let last = (resolution - 1) as i64;
    let mut out = [0.0f32; 3];
    for (tap, &weight) in kernel.iter().enumerate() {
        let offset = tap as i64 - radius;
        // Edges clamp to the nearest cell so the kernel mass stays on the
        // field.
        let (sx, sy) = match axis {
            Axis::X => ((ix as i64 + offset).clamp(0, last), iy as i64),
            Axis::Y => (ix as i64, (iy as i64 + offset).clamp(0, last)),
        };
        let sample = field.get(sx as usize, sy as usize);
        for channel in 0..3 {
            out[channel] += weight * sample[channel];
        }
    }
    out
}
