//! Thin egui host around the playground core.
//!
//! Translates pointer and keyboard input into core events, uploads the
//! composed surface as a texture, and draws the statistics HUD text from
//! the core's numeric HUD model.

mod input;
mod ui;

pub use ui::{FieldscopeApp, HUD_HEIGHT};
