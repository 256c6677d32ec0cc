//! Menu window: a draggable, resizable, scrollable panel.
//!
//! The window is also the coordinate frame its children are anchored to;
//! see [`crate::binder`].

use std::ops::Range;

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::controller::{DragController, PointerCapture, ResizeController};
use crate::geometry::{self, MinSize};
use crate::input::InputSnapshot;
use crate::scroll::{DEFAULT_SCROLL_SENSITIVITY, ScrollModel};

/// Inset of the content clip from the window edges.
const CONTENT_INSET: f64 = 5.0;

/// Which controllers a window runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowMode {
    /// Cannot be moved or resized.
    Fixed,
    /// Can be dragged by its title bar.
    #[default]
    Movable,
    /// Can be dragged and resized from the bottom-right handle.
    Resizable,
}

/// Construction parameters for a [`MenuWindow`].
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub origin: Point,
    pub size: Size,
    pub title: String,
    pub mode: WindowMode,
    pub show_title: bool,
    pub scroll_enabled: bool,
    /// Logical height of the scrollable content.
    pub content_height: f64,
    pub title_bar_height: f64,
    pub scrollbar_width: f64,
    pub resize_handle_size: f64,
    pub min_size: MinSize,
    pub scroll_sensitivity: f64,
}

impl WindowConfig {
    /// A movable, titled window with scrolling disabled.
    pub fn new(title: impl Into<String>, origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            title: title.into(),
            mode: WindowMode::default(),
            show_title: true,
            scroll_enabled: false,
            content_height: 0.0,
            title_bar_height: 30.0,
            scrollbar_width: 15.0,
            resize_handle_size: 10.0,
            min_size: MinSize::default(),
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
        }
    }

    pub fn with_mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_title_bar(mut self, show: bool) -> Self {
        self.show_title = show;
        self
    }

    /// Enable scrolling over content of the given logical height.
    pub fn with_scroll(mut self, content_height: f64) -> Self {
        self.scroll_enabled = true;
        self.content_height = content_height;
        self
    }

    pub fn with_min_size(mut self, min_size: MinSize) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_scroll_sensitivity(mut self, sensitivity: f64) -> Self {
        self.scroll_sensitivity = sensitivity;
        self
    }

    pub fn with_title_bar_height(mut self, height: f64) -> Self {
        self.title_bar_height = height;
        self
    }

    pub fn with_scrollbar_width(mut self, width: f64) -> Self {
        self.scrollbar_width = width;
        self
    }

    pub fn with_resize_handle_size(mut self, size: f64) -> Self {
        self.resize_handle_size = size;
        self
    }
}

#[derive(Debug, Clone)]
pub struct MenuWindow {
    origin: Point,
    size: Size,
    mode: WindowMode,
    show_title: bool,
    title: String,
    scroll_enabled: bool,
    scroll: ScrollModel,
    /// Derived from the scroll offset after every update.
    scroll_thumb: Rect,
    title_bar_height: f64,
    scrollbar_width: f64,
    resize_handle_size: f64,
    drag: DragController,
    resize: ResizeController,
}

impl MenuWindow {
    pub fn new(config: WindowConfig) -> Self {
        let mut window = Self {
            origin: config.origin,
            size: geometry::non_negative(config.size),
            mode: config.mode,
            show_title: config.show_title,
            title: config.title,
            scroll_enabled: config.scroll_enabled,
            scroll: ScrollModel::new(config.content_height)
                .with_sensitivity(config.scroll_sensitivity),
            scroll_thumb: Rect::ZERO,
            title_bar_height: config.title_bar_height,
            scrollbar_width: config.scrollbar_width,
            resize_handle_size: config.resize_handle_size,
            drag: DragController::new(),
            resize: ResizeController::new(config.min_size),
        };
        window.rederive_thumb();
        window
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        geometry::rect_at(self.origin, self.size)
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shows_title(&self) -> bool {
        self.show_title
    }

    /// Movable and resizable windows can both be dragged.
    pub fn is_movable(&self) -> bool {
        self.mode != WindowMode::Fixed
    }

    pub fn is_resizable(&self) -> bool {
        self.mode == WindowMode::Resizable
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    pub fn is_dragging_scrollbar(&self) -> bool {
        self.scroll.is_dragging_thumb()
    }

    /// Pointer offset captured when the current drag began.
    pub fn drag_offset(&self) -> Option<Vec2> {
        self.drag.offset()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn content_height(&self) -> f64 {
        self.scroll.content_height()
    }

    pub fn scroll_model(&self) -> &ScrollModel {
        &self.scroll
    }

    /// Current thumb rectangle; zero when scrolling is inactive.
    pub fn scroll_thumb(&self) -> Rect {
        self.scroll_thumb
    }

    /// Height of the title bar, or zero when it is hidden.
    pub fn header_height(&self) -> f64 {
        if self.show_title {
            self.title_bar_height
        } else {
            0.0
        }
    }

    /// Visible height of the content area.
    pub fn viewport_height(&self) -> f64 {
        (self.size.height - self.header_height()).max(0.0)
    }

    pub fn title_bar_rect(&self) -> Rect {
        geometry::rect_at(self.origin, Size::new(self.size.width, self.title_bar_height))
    }

    /// Square handle at the bottom-right corner.
    pub fn resize_handle_rect(&self) -> Rect {
        let s = self.resize_handle_size;
        let bounds = self.bounds();
        Rect::new(bounds.x1 - s, bounds.y1 - s, bounds.x1, bounds.y1)
    }

    /// Scrollbar column from the header bottom to the window bottom.
    pub fn scroll_track(&self) -> Rect {
        let bounds = self.bounds();
        geometry::rect_at(
            Point::new(bounds.x1 - self.scrollbar_width, bounds.y0 + self.header_height()),
            Size::new(self.scrollbar_width, self.viewport_height()),
        )
    }

    /// Whether the scrollbar is live (drawn and hit-tested).
    pub fn is_scroll_active(&self) -> bool {
        self.scroll_enabled && self.scroll.is_scrollable(self.viewport_height())
    }

    /// Clip rectangle for the scrollable content.
    pub fn content_clip(&self) -> Rect {
        let header = self.header_height();
        geometry::rect_at(
            Point::new(
                self.origin.x + CONTENT_INSET,
                self.origin.y + header + CONTENT_INSET,
            ),
            Size::new(
                self.size.width - 4.0 * CONTENT_INSET,
                self.size.height - header - 2.0 * CONTENT_INSET,
            ),
        )
    }

    /// Top edge of content row `index` in screen space.
    pub fn row_top(&self, index: usize, row_pitch: f64) -> f64 {
        self.origin.y + self.header_height() - self.scroll.offset() + index as f64 * row_pitch
    }

    /// Rows of height `row_height`, spaced `row_pitch` apart, that overlap
    /// the content clip.
    ///
    /// This only trims draw calls; renderers still clip to
    /// [`content_clip`](Self::content_clip).
    pub fn visible_rows(&self, row_pitch: f64, row_height: f64, count: usize) -> Range<usize> {
        if row_pitch <= 0.0 {
            return 0..count;
        }
        let clip = self.content_clip();
        let base = self.row_top(0, row_pitch);
        let first = ((clip.y0 - base - row_height) / row_pitch).ceil().max(0.0);
        let last = ((clip.y1 - base) / row_pitch).floor();
        if last < first {
            return 0..0;
        }
        let first = (first as usize).min(count);
        let end = ((last as usize).saturating_add(1)).min(count);
        first..end.max(first)
    }

    /// Run one frame of interaction: drag, then resize, then scroll.
    ///
    /// The order matters: resize measures from the origin the drag just
    /// produced, and the scroll track is derived from the final bounds.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) {
        if self.is_movable() && self.show_title {
            let title_bar = self.title_bar_rect();
            if let Some(origin) = self.drag.step(input, title_bar, self.origin) {
                let delta = origin - self.origin;
                if delta != Vec2::ZERO {
                    self.origin = origin;
                    if self.is_scroll_active() {
                        self.scroll_thumb = self.scroll_thumb + delta;
                    }
                    log::trace!("window '{}' moved to ({:.1}, {:.1})", self.title, origin.x, origin.y);
                }
            }
        }

        if self.is_resizable() && !self.drag.is_active() {
            let handle = self.resize_handle_rect();
            if let Some(size) = self.resize.step(input, handle, self.origin) {
                self.size = geometry::non_negative(size);
            }
        }

        if self.scroll_enabled {
            let track = self.scroll_track();
            let allow_grab = !self.drag.is_active() && !self.resize.is_active();
            self.scroll_thumb = self.scroll.update(input, track, allow_grab);
        } else {
            self.scroll_thumb = Rect::ZERO;
        }
    }

    fn rederive_thumb(&mut self) {
        self.scroll_thumb = if self.is_scroll_active() {
            self.scroll.thumb_rect(self.scroll_track())
        } else {
            Rect::ZERO
        };
    }
}
