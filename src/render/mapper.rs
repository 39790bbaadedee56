//! Affine transform between data space and canvas pixels.

use crate::field::GridSpec;

/// Bidirectional data/pixel mapping for a square canvas.
///
/// Pure in the grid bounds and canvas size; performs no clamping, so
/// out-of-bounds inputs map outside the canvas.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    x_min: f64,
    y_min: f64,
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    pub fn new(spec: &GridSpec, canvas_size: usize) -> Self {
        // Degenerate bounds are handled upstream; the epsilon only keeps
        // the scales finite.
        let width = spec.width().max(f64::MIN_POSITIVE);
        let height = spec.height().max(f64::MIN_POSITIVE);
        Self {
            x_min: spec.x_min,
            y_min: spec.y_min,
            scale_x: canvas_size as f64 / width,
            scale_y: canvas_size as f64 / height,
        }
    }

    /// Map a data point to canvas pixel coordinates.
    pub fn to_pixel(&self, point: [f64; 2]) -> (f32, f32) {
        (
            ((point[0] - self.x_min) * self.scale_x) as f32,
            ((point[1] - self.y_min) * self.scale_y) as f32,
        )
    }

    /// Map canvas pixel coordinates back to data space.
    pub fn to_data(&self, px: f32, py: f32) -> [f64; 2] {
        [
            self.x_min + f64::from(px) / self.scale_x,
            self.y_min + f64::from(py) / self.scale_y,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CoordinateMapper {
        let spec = GridSpec {
            resolution: 100,
            x_min: -6.0,
            x_max: 4.0,
            y_min: 2.0,
            y_max: 22.0,
        };
        CoordinateMapper::new(&spec, 600)
    }

    #[test]
    fn corners_map_to_canvas_corners() {
        let mapper = mapper();
        assert_eq!(mapper.to_pixel([-6.0, 2.0]), (0.0, 0.0));
        assert_eq!(mapper.to_pixel([4.0, 22.0]), (600.0, 600.0));
    }

    #[test]
    fn round_trips_within_tolerance() {
        let mapper = mapper();
        for point in [[-6.0, 2.0], [0.0, 10.0], [3.9, 21.5], [-2.25, 7.125]] {
            let (px, py) = mapper.to_pixel(point);
            let back = mapper.to_data(px, py);
            assert!((back[0] - point[0]).abs() < 1e-4, "{point:?} -> {back:?}");
            assert!((back[1] - point[1]).abs() < 1e-4, "{point:?} -> {back:?}");
        }
    }

    #[test]
    fn out_of_bounds_points_are_not_clamped() {
        let mapper = mapper();
        let (px, _) = mapper.to_pixel([-7.0, 10.0]);
        assert!(px < 0.0);
        let (qx, qy) = mapper.to_pixel([5.0, 23.0]);
        assert!(qx > 600.0);
        assert!(qy > 600.0);
    }
}
