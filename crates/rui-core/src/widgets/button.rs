//! Push button.

use kurbo::{Point, Rect, Size, Vec2};

use super::WidgetState;
use crate::binder::Anchored;
use crate::geometry;
use crate::input::InputSnapshot;

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    relative_offset: Vec2,
    bounds: Rect,
    state: WidgetState,
}

impl Button {
    /// Create a button at `offset` (relative to its window, or to the screen
    /// when it is used unanchored).
    pub fn new(label: impl Into<String>, offset: Vec2, size: Size) -> Self {
        Self {
            label: label.into(),
            relative_offset: offset,
            bounds: geometry::rect_at(offset.to_point(), size),
            state: WidgetState::Normal,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Update hover/press state. Returns `true` when clicked this frame.
    ///
    /// A click is a release of the primary button over the button.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        let over = geometry::contains(self.bounds, input.pointer_position());
        self.state = WidgetState::from_pointer(over, input.is_primary_down());
        let clicked = over && input.is_primary_released();
        if clicked {
            log::debug!("button '{}' clicked", self.label);
        }
        clicked
    }
}

impl Anchored for Button {
    fn relative_offset(&self) -> Vec2 {
        self.relative_offset
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_origin(&mut self, origin: Point) {
        self.bounds = self.bounds.with_origin(origin);
    }
}
