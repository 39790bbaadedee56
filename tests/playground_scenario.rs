//! End-to-end session scenario driven through the public plugin surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fieldscope::dataset::{Label, LabeledPoint};
use fieldscope::playground::{
    InputEvent, LOGREG_NAME, Playground, PlaygroundOptions, STUMPS_NAME,
};

const CLASS_ZERO_CENTER: [f64; 2] = [-4.0, 0.0];
const CLASS_ONE_CENTER: [f64; 2] = [4.0, 0.0];
const CLUSTER_STD: f64 = 1.5;

/// 200 points, 100 per class, in two Gaussian clusters on the x axis.
fn balanced_base() -> Vec<LabeledPoint> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut normal = move || {
        let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
        let u2: f64 = rng.random();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    };
    let mut base = Vec::with_capacity(200);
    for (center, label) in [
        (CLASS_ZERO_CENTER, Label::Zero),
        (CLASS_ONE_CENTER, Label::One),
    ] {
        for _ in 0..100 {
            base.push(LabeledPoint::new(
                center[0] + CLUSTER_STD * normal(),
                center[1] + CLUSTER_STD * normal(),
                label,
            ));
        }
    }
    base
}

/// Three class-1 points just on the class-0 side of the boundary, above the
/// cluster axis where base data is sparse.
const NEW_POINTS: [[f64; 2]; 3] = [[-0.4, 2.6], [-0.3, 2.9], [-0.5, 2.75]];

#[test]
fn retrain_shifts_the_boundary_toward_added_points() {
    let base = balanced_base();
    let base_len = base.len();
    let mut playground = Playground::new(base, &PlaygroundOptions::default());
    assert_eq!(playground.registry().active_name(), STUMPS_NAME);

    // Construction trains and samples once.
    let initial_generation = playground.field_generation();
    assert_eq!(initial_generation, 1);

    // The target region is predicted class 0 before any user input.
    let before: Vec<f32> = playground.registry().predict_field(&NEW_POINTS);
    assert!(
        before.iter().all(|&p| p < 0.5),
        "target region should start as class 0, got {before:?}"
    );

    // One frame: pick label 1, click three times, retrain.
    let mut events = vec![InputEvent::SelectLabel(Label::One)];
    for point in NEW_POINTS {
        let (px, py) = playground.mapper().to_pixel(point);
        events.push(InputEvent::AddPoint { px, py });
    }
    events.push(InputEvent::Retrain);
    playground.update(&events, 0.016);

    // Exactly one recomputation, and full point accounting.
    assert_eq!(playground.field_generation(), initial_generation + 1);
    let (coords, labels) = playground.dataset().combined();
    assert_eq!(coords.len(), base_len + 3);
    assert!(labels[base_len..].iter().all(|&label| label == Label::One));

    // The grid cells nearest the added points now predict class 1.
    let grid = playground.grid();
    let cells: Vec<[f64; 2]> = NEW_POINTS
        .iter()
        .map(|&point| {
            let (ix, iy) = grid.nearest_cell(point);
            grid.cell_center(ix, iy)
        })
        .collect();
    let after = playground.registry().predict_field(&cells);
    for (cell, probability) in cells.iter().zip(&after) {
        assert!(
            *probability > 0.5,
            "cell {cell:?} should flip to class 1, got {probability}"
        );
    }
}

#[test]
fn idle_frames_never_recompute_the_field() {
    let mut playground = Playground::new(balanced_base(), &PlaygroundOptions::default());
    let generation = playground.field_generation();
    for _ in 0..5 {
        playground.update(&[], 0.016);
        let mut surface = egui::ColorImage::new([0, 0], Vec::new());
        playground.draw(&mut surface);
    }
    assert_eq!(playground.field_generation(), generation);
}

#[test]
fn switching_models_renders_the_last_fit_state() {
    let mut playground = Playground::new(balanced_base(), &PlaygroundOptions::default());

    // Grow the dataset and retrain only the active stumps model.
    let mut events = vec![InputEvent::SelectLabel(Label::One)];
    let deep_zero = [-6.0, 0.0];
    let (px, py) = playground.mapper().to_pixel(deep_zero);
    events.push(InputEvent::AddPoint { px, py });
    events.push(InputEvent::Retrain);
    playground.update(&events, 0.016);
    let generation = playground.field_generation();

    // Switching resamples the field from logreg's base-data fit, which
    // predates the added point.
    playground.update(
        &[InputEvent::SelectClassifier(LOGREG_NAME.to_string())],
        0.016,
    );
    assert_eq!(playground.registry().active_name(), LOGREG_NAME);
    assert_eq!(playground.field_generation(), generation + 1);
    let proba = playground.registry().predict_field(&[deep_zero]);
    assert!(
        proba[0] < 0.5,
        "logreg's stale fit should still call {deep_zero:?} class 0"
    );
}
