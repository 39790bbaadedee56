//! Frame composition for the playground canvas.

mod mapper;

pub use mapper::CoordinateMapper;

use egui::{Color32, ColorImage};

use crate::dataset::{Dataset, DatasetSummary, Label};
use crate::field::ColorField;

/// Marker and background colors for the canvas.
///
/// Marker colors are fully saturated while the field uses dark variants,
/// keeping overlay and markers visually separable.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub background: Color32,
    pub marker_outline: Color32,
    pub class_zero_marker: Color32,
    pub class_one_marker: Color32,
    /// Radius of the outline ring in pixels.
    pub outer_radius: f32,
    /// Radius of the class-colored disk in pixels.
    pub inner_radius: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            marker_outline: Color32::BLACK,
            class_zero_marker: Color32::from_rgb(255, 0, 0),
            class_one_marker: Color32::from_rgb(0, 0, 255),
            outer_radius: 6.0,
            inner_radius: 5.0,
        }
    }
}

impl RenderStyle {
    /// Marker disk color for a label.
    pub fn marker_color(&self, label: Label) -> Color32 {
        match label {
            Label::Zero => self.class_zero_marker,
            Label::One => self.class_one_marker,
        }
    }
}

/// Numeric inputs for the host-drawn statistics HUD.
#[derive(Debug, Clone)]
pub struct HudModel {
    pub classifier_name: String,
    pub pending_label: Label,
    pub summary: Option<DatasetSummary>,
}

/// Composes the decision field, point markers, and background into the
/// output surface.
pub struct PlaygroundRenderer {
    canvas_size: usize,
    style: RenderStyle,
}

impl PlaygroundRenderer {
    pub fn new(canvas_size: usize) -> Self {
        Self {
            canvas_size,
            style: RenderStyle::default(),
        }
    }

    pub fn canvas_size(&self) -> usize {
        self.canvas_size
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Draw one frame in fixed z-order: background, upscaled field, then
    /// markers (base points first, user points on top).
    ///
    /// A missing field (nothing computed yet) skips the overlay and leaves
    /// the plain background under the markers.
    pub fn render(
        &self,
        field: Option<&ColorField>,
        dataset: &Dataset,
        mapper: &CoordinateMapper,
        surface: &mut ColorImage,
    ) {
        let size = self.canvas_size;
        if surface.size != [size, size] {
            *surface = ColorImage::new([size, size], vec![self.style.background; size * size]);
        } else {
            surface.pixels.fill(self.style.background);
        }

        if let Some(field) = field {
            self.blit_field(field, surface);
        }

        for point in dataset.iter_all() {
            let (px, py) = mapper.to_pixel(point.coords());
            fill_circle(surface, px, py, self.style.outer_radius, self.style.marker_outline);
            fill_circle(
                surface,
                px,
                py,
                self.style.inner_radius,
                self.style.marker_color(point.label),
            );
        }
    }

    /// Bilinear upscale of the grid-resolution field onto the canvas.
    fn blit_field(&self, field: &ColorField, surface: &mut ColorImage) {
        let size = self.canvas_size;
        let steps = (field.resolution() - 1) as f32;
        for py in 0..size {
            let gy = (py as f32 + 0.5) / size as f32 * steps;
            for px in 0..size {
                let gx = (px as f32 + 0.5) / size as f32 * steps;
                let color = field.sample_bilinear(gx, gy);
                surface.pixels[py * size + px] = to_color32(color);
            }
        }
    }
}

fn to_color32(color: [f32; 3]) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(color[0]), channel(color[1]), channel(color[2]))
}

/// Rasterize a filled circle, clipping against the surface edges.
fn fill_circle(surface: &mut ColorImage, cx: f32, cy: f32, radius: f32, color: Color32) {
    let [width, height] = surface.size;
    if width == 0 || height == 0 || (cx + radius) < 0.0 || (cy + radius) < 0.0 {
        return;
    }
    let min_x = (cx - radius).floor().max(0.0) as usize;
    let max_x = ((cx + radius).ceil() as usize).min(width - 1);
    let min_y = (cy - radius).floor().max(0.0) as usize;
    let max_y = ((cy + radius).ceil() as usize).min(height - 1);
    let radius_sq = radius * radius;
    for y in min_y..=max_y {
        let dy = y as f32 + 0.5 - cy;
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - cx;
            if dx * dx + dy * dy <= radius_sq {
                surface.pixels[y * width + x] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LabeledPoint;
    use crate::field::GridSpec;

    fn blank() -> ColorImage {
        ColorImage::new([0, 0], Vec::new())
    }

    fn test_spec() -> GridSpec {
        GridSpec {
            resolution: 10,
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        }
    }

    #[test]
    fn render_allocates_the_canvas_size() {
        let renderer = PlaygroundRenderer::new(40);
        let dataset = Dataset::new(Vec::new());
        let mapper = CoordinateMapper::new(&test_spec(), 40);
        let mut surface = blank();
        renderer.render(None, &dataset, &mapper, &mut surface);
        assert_eq!(surface.size, [40, 40]);
    }

    #[test]
    fn missing_field_leaves_the_background() {
        let renderer = PlaygroundRenderer::new(20);
        let dataset = Dataset::new(Vec::new());
        let mapper = CoordinateMapper::new(&test_spec(), 20);
        let mut surface = blank();
        renderer.render(None, &dataset, &mapper, &mut surface);
        assert!(surface.pixels.iter().all(|&p| p == Color32::WHITE));
    }

    #[test]
    fn flat_field_covers_the_canvas() {
        let renderer = PlaygroundRenderer::new(20);
        let dataset = Dataset::new(Vec::new());
        let mapper = CoordinateMapper::new(&test_spec(), 20);
        let field = ColorField::flat(10, [0.0, 0.0, 0.392]);
        let mut surface = blank();
        renderer.render(Some(&field), &dataset, &mapper, &mut surface);
        let expected = Color32::from_rgb(0, 0, 100);
        assert!(surface.pixels.iter().all(|&p| p == expected));
    }

    #[test]
    fn markers_draw_class_color_over_outline() {
        let renderer = PlaygroundRenderer::new(100);
        let dataset = Dataset::new(vec![LabeledPoint::new(5.0, 5.0, Label::One)]);
        let mapper = CoordinateMapper::new(&test_spec(), 100);
        let mut surface = blank();
        renderer.render(None, &dataset, &mapper, &mut surface);

        // Center pixel carries the class color, the ring just outside the
        // inner radius carries the outline.
        assert_eq!(surface.pixels[50 * 100 + 50], Color32::from_rgb(0, 0, 255));
        assert_eq!(surface.pixels[50 * 100 + 55], Color32::BLACK);
    }

    #[test]
    fn offscreen_markers_do_not_panic() {
        let renderer = PlaygroundRenderer::new(30);
        let dataset = Dataset::new(vec![
            LabeledPoint::new(-100.0, -100.0, Label::Zero),
            LabeledPoint::new(100.0, 100.0, Label::One),
        ]);
        let mapper = CoordinateMapper::new(&test_spec(), 30);
        let mut surface = blank();
        renderer.render(None, &dataset, &mapper, &mut surface);
        assert_eq!(surface.size, [30, 30]);
    }

    #[test]
    fn repeated_renders_are_identical() {
        let renderer = PlaygroundRenderer::new(32);
        let dataset = Dataset::new(vec![LabeledPoint::new(2.0, 7.0, Label::Zero)]);
        let mapper = CoordinateMapper::new(&test_spec(), 32);
        let field = ColorField::flat(10, [0.392, 0.0, 0.0]);

        let mut first = blank();
        renderer.render(Some(&field), &dataset, &mapper, &mut first);
        let mut second = blank();
        renderer.render(Some(&field), &dataset, &mapper, &mut second);
        assert_eq!(first.pixels, second.pixels);
    }
}
