//! Plugin core: session state and the per-frame update/draw loop.
//!
//! The host constructs a [`Playground`] with the initial dataset and canvas
//! size, feeds it an ordered input-event batch plus elapsed time every
//! frame, and blits the surface it draws. All state lives here; there is no
//! process-wide singleton.

use egui::ColorImage;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::dataset::{Dataset, Label, LabeledPoint, summarize};
use crate::field::{FieldSampler, GridSpec};
use crate::ml::logreg::LogRegModel;
use crate::ml::stumps::BoostedStumpsModel;
use crate::ml::svm::LinearSvmModel;
use crate::ml::{ClassifierRegistry, RegistryError};
use crate::render::{CoordinateMapper, HudModel, PlaygroundRenderer};

/// Registry name of the boosted-stumps classifier.
pub const STUMPS_NAME: &str = "boosted stumps";
/// Registry name of the logistic-regression classifier.
pub const LOGREG_NAME: &str = "logistic regression";
/// Registry name of the linear SVM classifier.
pub const SVM_NAME: &str = "linear svm";

/// One host input event. Events are handled independently and atomically,
/// strictly in batch order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// End the session; the host stops invoking the plugin.
    Quit,
    /// Label assigned to points added from now on.
    SelectLabel(Label),
    /// Switch the active classifier by registry name.
    SelectClassifier(String),
    /// Re-fit the active classifier on base plus user points.
    Retrain,
    /// Add a point at canvas pixel coordinates with the pending label.
    AddPoint { px: f32, py: f32 },
}

/// Construction parameters for a playground session.
#[derive(Debug, Clone)]
pub struct PlaygroundOptions {
    pub canvas_size: usize,
    pub grid_resolution: usize,
    pub bounds_margin: f64,
    pub blur_sigma: f32,
    pub default_classifier: String,
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            canvas_size: 600,
            grid_resolution: 100,
            bounds_margin: 1.0,
            blur_sigma: 1.0,
            default_classifier: STUMPS_NAME.to_string(),
        }
    }
}

impl From<&AppConfig> for PlaygroundOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            canvas_size: config.canvas.size,
            grid_resolution: config.field.resolution,
            bounds_margin: config.field.margin,
            blur_sigma: config.field.blur_sigma,
            default_classifier: config.model.default_classifier.clone(),
        }
    }
}

/// The interactive decision-boundary session.
pub struct Playground {
    dataset: Dataset,
    registry: ClassifierRegistry,
    sampler: FieldSampler,
    mapper: CoordinateMapper,
    renderer: PlaygroundRenderer,
    pending_label: Label,
    active: bool,
}

impl Playground {
    /// Build a session over the given base dataset.
    ///
    /// All classifiers are registered and pre-fit on the base points; the
    /// initial field is computed before the first frame.
    pub fn new(base: Vec<LabeledPoint>, options: &PlaygroundOptions) -> Self {
        let dataset = Dataset::new(base);
        let spec = GridSpec::from_base_points(
            dataset.base(),
            options.grid_resolution,
            options.bounds_margin,
        );
        let mapper = CoordinateMapper::new(&spec, options.canvas_size);
        let renderer = PlaygroundRenderer::new(options.canvas_size);

        let mut registry = ClassifierRegistry::new(
            STUMPS_NAME,
            Box::new(BoostedStumpsModel::default()),
        );
        registry.register(LOGREG_NAME, Box::new(LogRegModel::default()));
        registry.register(SVM_NAME, Box::new(LinearSvmModel::default()));
        if let Err(err) = registry.set_active(&options.default_classifier) {
            warn!("Falling back to '{STUMPS_NAME}': {err}");
        }

        let (points, labels) = dataset.combined();
        match registry.train_all(&points, &labels) {
            Ok(()) => info!(
                points = points.len(),
                "Pre-fit all classifiers on the base dataset"
            ),
            Err(err) => warn!("Classifiers start untrained: {err}"),
        }

        let mut sampler = FieldSampler::new(spec, options.blur_sigma);
        if let Err(err) = sampler.ensure_fresh(&registry) {
            warn!("Initial field computation skipped: {err}");
        }

        Self {
            dataset,
            registry,
            sampler,
            mapper,
            renderer,
            pending_label: Label::Zero,
            active: true,
        }
    }

    /// Whether the session should keep receiving frames.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Label newly added points will receive.
    pub fn pending_label(&self) -> Label {
        self.pending_label
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn registry(&self) -> &ClassifierRegistry {
        &self.registry
    }

    pub fn grid(&self) -> &GridSpec {
        self.sampler.spec()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Generation counter of the cached field.
    pub fn field_generation(&self) -> u64 {
        self.sampler.generation()
    }

    /// Edge length of the square canvas in pixels.
    pub fn canvas_size(&self) -> usize {
        self.renderer.canvas_size()
    }

    /// Consume one frame's event batch, then refresh the field if stale.
    ///
    /// Each event's effects are visible to later events in the same batch.
    /// Recomputation happens here so `draw` never does expensive work.
    pub fn update(&mut self, events: &[InputEvent], _delta_time: f32) {
        for event in events {
            self.handle_event(event);
        }
        if self.sampler.is_stale() {
            if let Err(err) = self.sampler.ensure_fresh(&self.registry) {
                warn!("Field recomputation skipped: {err}");
            }
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Quit => {
                info!("Session ended by host");
                self.active = false;
            }
            InputEvent::SelectLabel(label) => {
                self.pending_label = *label;
            }
            InputEvent::SelectClassifier(name) => match self.registry.set_active(name) {
                Ok(()) => {
                    // The new model renders whatever it last fit; switching
                    // never implies a retrain.
                    self.sampler.invalidate();
                    info!(classifier = name.as_str(), "Switched active classifier");
                }
                Err(err) => error!("Ignoring classifier switch: {err}"),
            },
            InputEvent::Retrain => self.retrain(),
            InputEvent::AddPoint { px, py } => {
                let [x, y] = self.mapper.to_data(*px, *py);
                self.dataset.add_point(x, y, self.pending_label);
            }
        }
    }

    fn retrain(&mut self) {
        let (points, labels) = self.dataset.combined();
        match self.registry.train_active(&points, &labels) {
            Ok(()) => {
                info!(
                    classifier = self.registry.active_name(),
                    points = points.len(),
                    added = self.dataset.user().len(),
                    "Retrained active classifier"
                );
                self.dataset.clear_dirty();
                self.sampler.invalidate();
            }
            Err(RegistryError::InsufficientClassDiversity) => {
                warn!("Retrain skipped: training data holds a single class");
            }
            Err(err) => error!("Retrain failed: {err}"),
        }
    }

    /// Compose the current frame into the surface. Never recomputes the
    /// field; a frame is always produced.
    pub fn draw(&self, surface: &mut ColorImage) {
        self.renderer
            .render(self.sampler.field(), &self.dataset, &self.mapper, surface);
    }

    /// Numeric inputs for the host-drawn HUD.
    pub fn hud(&self) -> HudModel {
        let (points, _) = self.dataset.combined();
        HudModel {
            classifier_name: self.registry.active_name().to_string(),
            pending_label: self.pending_label,
            summary: summarize(&points),
        }
    }
}
