//! Lazy recomputation and caching of the decision-field colors.

use tracing::debug;

use super::{ColorField, FieldError, GridSpec, gaussian_blur};
use crate::ml::ClassifierRegistry;

/// Background color for cells predicted as class 0.
pub const CLASS_ZERO_FIELD_COLOR: [f32; 3] = [0.392, 0.0, 0.0];
/// Background color for cells predicted as class 1.
pub const CLASS_ONE_FIELD_COLOR: [f32; 3] = [0.0, 0.0, 0.392];
/// Flat color used when no field was ever computed.
pub const FALLBACK_FIELD_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Cache state of the sampled field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// The field no longer reflects the active model; the next
    /// [`FieldSampler::ensure_fresh`] recomputes it.
    Stale,
    /// The field is current as of the tagged generation.
    Valid { generation: u64 },
}

/// Samples the active classifier over the grid and caches the colored
/// result until invalidated.
pub struct FieldSampler {
    spec: GridSpec,
    blur_sigma: f32,
    state: FieldState,
    generation: u64,
    field: Option<ColorField>,
}

impl FieldSampler {
    /// Create a stale sampler; the first `ensure_fresh` computes
    /// generation 1.
    pub fn new(spec: GridSpec, blur_sigma: f32) -> Self {
        Self {
            spec,
            blur_sigma,
            state: FieldState::Stale,
            generation: 0,
            field: None,
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Count of successful recomputations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_stale(&self) -> bool {
        self.state == FieldState::Stale
    }

    /// Mark the cached field as no longer reflecting the active model.
    pub fn invalidate(&mut self) {
        self.state = FieldState::Stale;
    }

    /// Last computed field, regardless of staleness. `None` until the
    /// first successful or fallback computation.
    pub fn field(&self) -> Option<&ColorField> {
        self.field.as_ref()
    }

    /// Recompute the field if stale; a valid cache returns immediately.
    ///
    /// On degenerate bounds the previous field is kept (or a flat fallback
    /// installed on the first call) and the cache stays stale.
    pub fn ensure_fresh(&mut self, registry: &ClassifierRegistry) -> Result<(), FieldError> {
        if let FieldState::Valid { .. } = self.state {
            return Ok(());
        }
        let grid = match self.spec.grid_points() {
            Ok(grid) => grid,
            Err(err) => {
                if self.field.is_none() {
                    self.field = Some(ColorField::flat(
                        self.spec.resolution,
                        FALLBACK_FIELD_COLOR,
                    ));
                }
                return Err(err);
            }
        };

        let probabilities = registry.predict_field(&grid);
        let resolution = self.spec.resolution;
        let mut field = ColorField::flat(resolution, CLASS_ZERO_FIELD_COLOR);
        for (idx, cell) in field.data_mut().iter_mut().enumerate() {
            if probabilities[idx] > 0.5 {
                *cell = CLASS_ONE_FIELD_COLOR;
            }
        }
        gaussian_blur(&mut field, self.blur_sigma);

        self.generation += 1;
        self.state = FieldState::Valid {
            generation: self.generation,
        };
        self.field = Some(field);
        debug!(
            generation = self.generation,
            classifier = registry.active_name(),
            "Recomputed decision field"
        );
        Ok(())
    }

    #[cfg(test)]
    fn replace_spec(&mut self, spec: GridSpec) {
        self.spec = spec;
    }
}
