//! Painter trait abstraction.

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Drawing backend used by the render passes.
///
/// All coordinates are screen-space. Clips nest: each `push_clip` must be
/// matched by a `pop_clip`.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a stroke of `width`, centred on the edge.
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn fill_triangle(&mut self, points: [Point; 3], color: Color);

    /// Restrict subsequent drawing to `rect`.
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    /// Width of `text` laid out on a single line at `font_size`.
    fn measure_text(&mut self, text: &str, font_size: f64) -> f64;

    /// Draw `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color);
}

/// Per-frame parameters for a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
}

impl RenderContext {
    /// Create a new render context.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(245, 245, 245, 255),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Transform from logical widget coordinates to physical pixels.
    pub fn transform(&self) -> Affine {
        if self.scale_factor > 0.0 {
            Affine::scale(self.scale_factor)
        } else {
            Affine::IDENTITY
        }
    }

    /// Physical target size in whole pixels.
    pub fn target_size(&self) -> (u32, u32) {
        (
            self.viewport_size.width.max(0.0) as u32,
            self.viewport_size.height.max(0.0) as u32,
        )
    }
}
