//! Recording painter for headless rendering and tests.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::renderer::Painter;

/// Horizontal advance per character, as a fraction of the font size.
const ADVANCE_RATIO: f64 = 0.5;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        width: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    FillTriangle {
        points: [Point; 3],
        color: Color,
    },
    PushClip(Rect),
    PopClip,
    Text {
        text: String,
        origin: Point,
        font_size: f64,
        color: Color,
    },
}

/// A [`Painter`] that records commands instead of drawing them.
///
/// Text is measured with a fixed per-character advance, so layouts are
/// deterministic without any fonts installed.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clips currently pushed.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Strings drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles filled so far, in order.
    pub fn filled_rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, width, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self.commands.push(DrawCommand::FillTriangle { points, color });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }

    fn measure_text(&mut self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * ADVANCE_RATIO
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font_size,
            color,
        });
    }
}
