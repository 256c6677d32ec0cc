//! Pointer-capture controllers for dragging and resizing.
//!
//! Both controllers follow the same capture policy:
//! - capture starts on a primary pressed edge inside the activation region
//! - capture ends the instant the primary button is no longer held,
//!   wherever the pointer happens to be
//!
//! The controllers only compute new anchors/sizes; the owner decides what
//! to write them into.

use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::{self, MinSize};
use crate::input::InputSnapshot;

/// A capture that lives for one press-hold-release sequence.
pub trait PointerCapture {
    /// Whether the capture is currently held.
    fn is_active(&self) -> bool;

    /// Drop the capture.
    fn release(&mut self);

    /// Drop the capture if the primary button is no longer held.
    ///
    /// Returns `true` if a held capture was released by this call.
    fn release_unless_held<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        if self.is_active() && !input.is_primary_down() {
            self.release();
            true
        } else {
            false
        }
    }
}

/// "Pick up at offset, follow pointer, drop on release".
///
/// The controller is parameterized by the region it activates over and the
/// anchor it moves, both passed in per call. A window title bar and a
/// scrollbar thumb each own their own instance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragController {
    /// Pointer position minus anchor at the moment of pickup.
    grab: Option<Vec2>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging, remembering where on the anchor the pointer grabbed.
    pub fn begin(&mut self, pointer: Point, anchor: Point) {
        let offset = pointer - anchor;
        log::debug!("drag begin: offset ({:.1}, {:.1})", offset.x, offset.y);
        self.grab = Some(offset);
    }

    /// The captured offset, if dragging.
    pub fn offset(&self) -> Option<Vec2> {
        self.grab
    }

    /// Where the anchor should be for the given pointer position.
    pub fn follow(&self, pointer: Point) -> Option<Point> {
        self.grab.map(|offset| pointer - offset)
    }

    /// Run one frame of the drag policy.
    ///
    /// Returns the new anchor while a drag is held, `None` otherwise.
    pub fn step<I: InputSnapshot + ?Sized>(
        &mut self,
        input: &I,
        region: Rect,
        anchor: Point,
    ) -> Option<Point> {
        let pointer = input.pointer_position();
        if input.is_primary_pressed() && geometry::contains(region, pointer) {
            self.begin(pointer, anchor);
        }
        self.release_unless_held(input);
        self.follow(pointer)
    }
}

impl PointerCapture for DragController {
    fn is_active(&self) -> bool {
        self.grab.is_some()
    }

    fn release(&mut self) {
        if self.grab.take().is_some() {
            log::debug!("drag end");
        }
    }
}

/// Follows the pointer from a bottom-right handle, clamped to a minimum size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeController {
    active: bool,
    min: MinSize,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(MinSize::default())
    }
}

impl ResizeController {
    pub fn new(min: MinSize) -> Self {
        Self { active: false, min }
    }

    /// Run one frame of the resize policy.
    ///
    /// `handle` is the activation region; `origin` is the top-left the size
    /// is measured from. Returns the new size while a resize is held.
    pub fn step<I: InputSnapshot + ?Sized>(
        &mut self,
        input: &I,
        handle: Rect,
        origin: Point,
    ) -> Option<Size> {
        let pointer = input.pointer_position();
        if input.is_primary_pressed() && geometry::contains(handle, pointer) {
            log::debug!("resize begin at ({:.1}, {:.1})", pointer.x, pointer.y);
            self.active = true;
        }
        self.release_unless_held(input);
        if !self.active {
            return None;
        }
        let raw = Size::new(pointer.x - origin.x, pointer.y - origin.y);
        Some(self.min.clamp(raw))
    }
}

impl PointerCapture for ResizeController {
    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) {
        if self.active {
            log::debug!("resize end");
        }
        self.active = false;
    }
}
