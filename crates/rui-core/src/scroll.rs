//! Vertical scroll model: offset, wheel input, and a draggable thumb.
//!
//! The offset is the only authoritative value. The thumb rectangle is
//! always rederived from it after input runs, never the reverse, so the
//! wheel path and the thumb-drag path cannot fight each other.

use kurbo::{Point, Rect, Size};

use crate::controller::{DragController, PointerCapture};
use crate::input::InputSnapshot;

/// Default wheel sensitivity in content units per wheel line.
pub const DEFAULT_SCROLL_SENSITIVITY: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollModel {
    offset: f64,
    content_height: f64,
    sensitivity: f64,
    thumb_drag: DragController,
}

impl ScrollModel {
    pub fn new(content_height: f64) -> Self {
        Self {
            offset: 0.0,
            content_height: content_height.max(0.0),
            sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            thumb_drag: DragController::new(),
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn is_dragging_thumb(&self) -> bool {
        self.thumb_drag.is_active()
    }

    /// Largest valid offset for a viewport of the given height.
    pub fn max_offset(&self, viewport_height: f64) -> f64 {
        (self.content_height - viewport_height).max(0.0)
    }

    /// Whether the content overflows a viewport that has room for a thumb.
    pub fn is_scrollable(&self, viewport_height: f64) -> bool {
        viewport_height > 0.0 && self.content_height > viewport_height
    }

    /// Set the offset, clamped into `[0, max_offset]`.
    pub fn set_offset(&mut self, offset: f64, viewport_height: f64) {
        self.offset = offset.clamp(0.0, self.max_offset(viewport_height));
    }

    /// Wheel path: positive deltas scroll toward the top of the content.
    pub fn apply_wheel(&mut self, delta: f64, viewport_height: f64) {
        if delta != 0.0 {
            self.set_offset(self.offset - delta * self.sensitivity, viewport_height);
            log::trace!("wheel {delta} -> offset {:.1}", self.offset);
        }
    }

    /// Thumb height proportional to the visible fraction of the content.
    pub fn thumb_height(&self, track: Rect) -> f64 {
        let viewport = track.height();
        if self.content_height <= 0.0 {
            return viewport;
        }
        viewport * (viewport / self.content_height)
    }

    /// Distance the thumb can move inside the track.
    pub fn travel(&self, track: Rect) -> f64 {
        (track.height() - self.thumb_height(track)).max(0.0)
    }

    /// Thumb rectangle for the current offset.
    pub fn thumb_rect(&self, track: Rect) -> Rect {
        let max = self.max_offset(track.height());
        let ratio = if max > 0.0 { self.offset / max } else { 0.0 };
        let y = track.y0 + ratio * self.travel(track);
        Rect::from_origin_size(
            Point::new(track.x0, y),
            Size::new(track.width(), self.thumb_height(track)),
        )
    }

    /// Offset implied by a thumb whose top edge sits at `thumb_y`.
    pub fn offset_from_thumb(&self, thumb_y: f64, track: Rect) -> f64 {
        let max = self.max_offset(track.height());
        let travel = self.travel(track);
        if travel <= 0.0 {
            return 0.0;
        }
        ((thumb_y - track.y0) / travel * max).clamp(0.0, max)
    }

    /// Run wheel then thumb-drag input against `track`, returning the thumb.
    ///
    /// `allow_grab` gates only the start of a thumb drag; a drag already in
    /// progress keeps following the pointer.
    pub fn update<I: InputSnapshot + ?Sized>(
        &mut self,
        input: &I,
        track: Rect,
        allow_grab: bool,
    ) -> Rect {
        let viewport = track.height();
        if !self.is_scrollable(viewport) {
            self.park(viewport);
            return Rect::ZERO;
        }

        // The viewport may have shrunk or grown since last frame.
        self.set_offset(self.offset, viewport);
        self.apply_wheel(input.wheel_delta(), viewport);

        let thumb = self.thumb_rect(track);
        // An empty region can never be entered, so no new grab starts.
        let grab_region = if allow_grab { thumb } else { Rect::ZERO };
        if let Some(anchor) = self.thumb_drag.step(input, grab_region, thumb.origin()) {
            let top = anchor.y.clamp(track.y0, track.y0 + self.travel(track));
            self.offset = self.offset_from_thumb(top, track);
        }

        self.thumb_rect(track)
    }

    /// Disable scrolling for a viewport the content fits in.
    pub fn park(&mut self, viewport_height: f64) {
        self.thumb_drag.release();
        self.set_offset(self.offset, viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::input::testing::{move_to, press, release, wheel};

    fn track() -> Rect {
        // 300 high window with a 30 px title bar.
        Rect::new(485.0, 130.0, 500.0, 400.0)
    }

    #[test]
    fn test_max_offset() {
        let model = ScrollModel::new(800.0);
        assert!((model.max_offset(270.0) - 530.0).abs() < f64::EPSILON);
        assert!(model.max_offset(900.0).abs() < f64::EPSILON);
        assert!(!model.is_scrollable(800.0));
    }

    #[test]
    fn test_wheel_scrolls_down_and_clamps() {
        let mut model = ScrollModel::new(800.0);
        model.apply_wheel(-3.0, 270.0);
        assert!((model.offset() - 60.0).abs() < f64::EPSILON);

        model.apply_wheel(-100.0, 270.0);
        assert!((model.offset() - 530.0).abs() < f64::EPSILON);

        model.apply_wheel(100.0, 270.0);
        assert!(model.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn test_thumb_geometry() {
        let mut model = ScrollModel::new(800.0);
        let track = track();
        let thumb = model.thumb_rect(track);
        let expected_height = 270.0 * (270.0 / 800.0);
        assert!((thumb.height() - expected_height).abs() < 1e-9);
        assert!((thumb.y0 - track.y0).abs() < f64::EPSILON);

        model.set_offset(530.0, 270.0);
        let thumb = model.thumb_rect(track);
        assert!((thumb.y1 - track.y1).abs() < 1e-9);
    }

    #[test]
    fn test_offset_from_thumb_roundtrip() {
        let mut model = ScrollModel::new(800.0);
        let track = track();
        for offset in [0.0, 12.5, 265.0, 530.0] {
            model.set_offset(offset, 270.0);
            let thumb = model.thumb_rect(track);
            let back = model.offset_from_thumb(thumb.y0, track);
            assert!((back - offset).abs() < 1e-9);
        }
    }

    #[test]
    fn test_thumb_drag_moves_offset() {
        let mut input = InputState::new();
        let mut model = ScrollModel::new(800.0);
        let track = track();

        press(&mut input, 490.0, 135.0);
        model.update(&input, track, true);
        assert!(model.is_dragging_thumb());

        // Drag by half the travel.
        let travel = model.travel(track);
        move_to(&mut input, 490.0, 135.0 + travel / 2.0);
        model.update(&input, track, true);
        assert!((model.offset() - 265.0).abs() < 1e-9);

        // Far past the end clamps to the max.
        move_to(&mut input, 490.0, 5000.0);
        model.update(&input, track, true);
        assert!((model.offset() - 530.0).abs() < 1e-9);

        release(&mut input, 490.0, 5000.0);
        model.update(&input, track, true);
        assert!(!model.is_dragging_thumb());
    }

    #[test]
    fn test_grab_blocked() {
        let mut input = InputState::new();
        let mut model = ScrollModel::new(800.0);

        press(&mut input, 490.0, 135.0);
        model.update(&input, track(), false);
        assert!(!model.is_dragging_thumb());
    }

    #[test]
    fn test_content_fits_disables_scrolling() {
        let mut input = InputState::new();
        let mut model = ScrollModel::new(200.0);

        wheel(&mut input, -5.0);
        let thumb = model.update(&input, track(), true);
        assert_eq!(thumb, Rect::ZERO);
        assert!(model.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn test_collapsed_viewport_disables_scrolling() {
        let mut input = InputState::new();
        let mut model = ScrollModel::new(800.0);
        let collapsed = Rect::new(485.0, 130.0, 500.0, 130.0);
        assert!(!model.is_scrollable(0.0));

        wheel(&mut input, -3.0);
        let thumb = model.update(&input, collapsed, true);
        assert_eq!(thumb, Rect::ZERO);
        assert!(model.offset().abs() < f64::EPSILON);
        assert!(!model.is_dragging_thumb());
    }

    #[test]
    fn test_park_clamps_offset_after_viewport_grows() {
        let mut model = ScrollModel::new(800.0);
        model.set_offset(530.0, 270.0);
        model.park(700.0);
        assert!((model.offset() - 100.0).abs() < f64::EPSILON);
    }
}
