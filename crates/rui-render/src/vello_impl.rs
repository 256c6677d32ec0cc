//! Vello-based painter implementation.

use kurbo::{Affine, BezPath, Circle, Point, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, Layout, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::renderer::Painter;

/// Font families tried in order for all widget text.
const FONT_STACK: &str = "system-ui, sans-serif";

/// Painter that builds a [`vello::Scene`] and shapes text with parley.
pub struct VelloPainter {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text rendering (cached across frames).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
    clip_depth: usize,
}

impl Default for VelloPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloPainter {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            clip_depth: 0,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        if self.clip_depth > 0 {
            log::warn!("{} clip layer(s) left open at end of frame", self.clip_depth);
            for _ in 0..self.clip_depth {
                self.scene.pop_layer();
            }
            self.clip_depth = 0;
        }
        std::mem::take(&mut self.scene)
    }

    fn layout(&mut self, text: &str, font_size: f64, color: Color) -> Layout<Brush> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font_size as f32));
        builder.push_default(StyleProperty::Brush(Brush::Solid(color)));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Source(
            FONT_STACK.into(),
        )));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        layout
    }
}

impl Painter for VelloPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.scene
            .stroke(&Stroke::new(width), Affine::IDENTITY, color, None, &rect);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let circle = Circle::new(center, radius);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &circle);
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let mut path = BezPath::new();
        path.move_to(points[0]);
        path.line_to(points[1]);
        path.line_to(points[2]);
        path.close_path();
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &path);
    }

    fn push_clip(&mut self, rect: Rect) {
        self.scene.push_clip_layer(Affine::IDENTITY, &rect);
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.scene.pop_layer();
        self.clip_depth -= 1;
    }

    fn measure_text(&mut self, text: &str, font_size: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        f64::from(self.layout(text, font_size, Color::BLACK).width())
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color) {
        if text.is_empty() {
            return;
        }
        let layout = self.layout(text, font_size, color);
        let brush = Brush::Solid(color);
        let transform = Affine::translate(origin.to_vec2());

        // Adapted from parley's vello example.
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(run.font())
                        .brush(&brush)
                        .hint(true)
                        .transform(transform)
                        .glyph_transform(glyph_xform)
                        .font_size(run.font_size())
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }
    }
}
