use eframe::egui::{
    self, CentralPanel, Color32, ColorImage, RichText, Sense, TextureHandle, TextureOptions, Vec2,
};

use super::input;
use crate::dataset::{AxisSummary, Label};
use crate::playground::Playground;

/// Extra viewport height reserved for the HUD below the canvas.
pub const HUD_HEIGHT: f32 = 120.0;

/// eframe application hosting one playground session.
pub struct FieldscopeApp {
    playground: Playground,
    surface: ColorImage,
    canvas_tex: Option<TextureHandle>,
}

impl FieldscopeApp {
    pub fn new(playground: Playground) -> Self {
        Self {
            playground,
            surface: ColorImage::new([0, 0], Vec::new()),
            canvas_tex: None,
        }
    }

    fn upload_canvas(&mut self, ctx: &egui::Context) -> egui::TextureId {
        match self.canvas_tex.as_mut() {
            Some(tex) => {
                tex.set(self.surface.clone(), TextureOptions::NEAREST);
                tex.id()
            }
            None => {
                let tex = ctx.load_texture(
                    "playground_canvas",
                    self.surface.clone(),
                    TextureOptions::NEAREST,
                );
                let id = tex.id();
                self.canvas_tex = Some(tex);
                id
            }
        }
    }
}

impl eframe::App for FieldscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let canvas_size = self.playground.canvas_size() as f32;
        let delta_time = ctx.input(|input| input.stable_dt);

        CentralPanel::default().show(ctx, |ui| {
            let (canvas_rect, response) =
                ui.allocate_exact_size(Vec2::splat(canvas_size), Sense::click());

            let mut events = input::keyboard_events(ctx);
            if let Some(event) = input::canvas_click(&response, canvas_rect) {
                events.push(event);
            }
            self.playground.update(&events, delta_time);
            self.playground.draw(&mut self.surface);

            let tex_id = self.upload_canvas(ctx);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(tex_id, canvas_rect, uv, Color32::WHITE);

            draw_hud(ui, &self.playground);
        });

        if !self.playground.active() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else {
            // Keep frames coming so key presses land without mouse motion.
            ctx.request_repaint();
        }
    }
}

fn draw_hud(ui: &mut egui::Ui, playground: &Playground) {
    let hud = playground.hud();
    let label_text = match hud.pending_label {
        Label::Zero => "Red (0)",
        Label::One => "Blue (1)",
    };
    ui.label(
        RichText::new(format!(
            "Classifier: {} | New point label: {} | Keys: 1/2 label, R retrain, L/B/S model",
            hud.classifier_name, label_text
        ))
        .strong(),
    );
    if let Some(summary) = hud.summary {
        ui.label(format_axis("x", &summary.x));
        ui.label(format_axis("y", &summary.y));
        ui.label(format!("points: {}", summary.count));
    }
}

fn format_axis(name: &str, axis: &AxisSummary) -> String {
    format!(
        "{name}: mean {:.2}  median {:.2}  std {:.2}  iqr {:.2}  min {:.2}  max {:.2}",
        axis.mean, axis.median, axis.std_dev, axis.iqr, axis.min, axis.max
    )
}
