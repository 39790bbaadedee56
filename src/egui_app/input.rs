//! Mapping from egui input to core events.
//!
//! Keys: `1`/`2` pick the pending label, `R` retrains, `L`/`B`/`S` switch
//! classifiers, a canvas click adds a point at the cursor.

use egui::{Context, Key, Rect, Response};

use crate::dataset::Label;
use crate::playground::{InputEvent, LOGREG_NAME, STUMPS_NAME, SVM_NAME};

/// Events derived from this frame's keyboard and viewport state.
pub(super) fn keyboard_events(ctx: &Context) -> Vec<InputEvent> {
    let mut events = Vec::new();
    ctx.input(|input| {
        if input.key_pressed(Key::Num1) {
            events.push(InputEvent::SelectLabel(Label::Zero));
        }
        if input.key_pressed(Key::Num2) {
            events.push(InputEvent::SelectLabel(Label::One));
        }
        if input.key_pressed(Key::R) {
            events.push(InputEvent::Retrain);
        }
        if input.key_pressed(Key::L) {
            events.push(InputEvent::SelectClassifier(LOGREG_NAME.to_string()));
        }
        if input.key_pressed(Key::B) {
            events.push(InputEvent::SelectClassifier(STUMPS_NAME.to_string()));
        }
        if input.key_pressed(Key::S) {
            events.push(InputEvent::SelectClassifier(SVM_NAME.to_string()));
        }
        if input.viewport().close_requested() {
            events.push(InputEvent::Quit);
        }
    });
    events
}

/// Point-add event for a click inside the canvas, in canvas-local pixels.
pub(super) fn canvas_click(response: &Response, canvas: Rect) -> Option<InputEvent> {
    if !response.clicked() {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    if !canvas.contains(pos) {
        return None;
    }
    Some(InputEvent::AddPoint {
        px: pos.x - canvas.left(),
        py: pos.y - canvas.top(),
    })
}
