//! Entry point for the egui-based Fieldscope UI.

use eframe::egui;
use fieldscope::config;
use fieldscope::dataset::{BlobsOptions, generate_blobs};
use fieldscope::egui_app::{FieldscopeApp, HUD_HEIGHT};
use fieldscope::logging;
use fieldscope::playground::{Playground, PlaygroundOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default configuration: {err}");
            config::AppConfig::default()
        }
    };

    let base = generate_blobs(&BlobsOptions {
        samples: config.dataset.samples,
        cluster_std: config.dataset.cluster_std,
        seed: config.dataset.seed,
    });
    let options = PlaygroundOptions::from(&config);
    let canvas = options.canvas_size as f32;
    let playground = Playground::new(base, &options);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([canvas, canvas + HUD_HEIGHT])
        .with_resizable(false);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fieldscope",
        native_options,
        Box::new(move |_cc| Ok(Box::new(FieldscopeApp::new(playground)))),
    )?;
    Ok(())
}
