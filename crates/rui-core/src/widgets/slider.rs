//! Horizontal integer slider.

use kurbo::{Point, Rect};

use crate::controller::{DragController, PointerCapture};
use crate::input::InputSnapshot;

/// Map a pointer x onto `[min, max]` across `bounds`, truncating toward `min`.
pub(crate) fn value_at(bounds: Rect, pointer: Point, min: i32, max: i32) -> i32 {
    if bounds.width() <= 0.0 {
        return min;
    }
    let relative = (pointer.x - bounds.x0) / bounds.width();
    let span = f64::from(max) - f64::from(min);
    let value = f64::from(min) + (span * relative).trunc();
    value.clamp(f64::from(min), f64::from(max)) as i32
}

#[derive(Debug, Clone)]
pub struct Slider {
    bounds: Rect,
    min: i32,
    max: i32,
    value: i32,
    show_value: bool,
    handle_width: f64,
    drag: DragController,
}

impl Slider {
    pub fn new(bounds: Rect, min: i32, max: i32, value: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            bounds,
            min,
            max,
            value: value.clamp(min, max),
            show_value: true,
            handle_width: 15.0,
            drag: DragController::new(),
        }
    }

    pub fn with_value_label(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn shows_value(&self) -> bool {
        self.show_value
    }

    pub fn handle_width(&self) -> f64 {
        self.handle_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Position of the value across the track, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (f64::from(self.value) - f64::from(self.min)) / (f64::from(self.max) - f64::from(self.min))
    }

    /// Returns `true` when the value changed this frame.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        if self.drag.step(input, self.bounds, self.bounds.origin()).is_none() {
            return false;
        }
        let value = value_at(self.bounds, input.pointer_position(), self.min, self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }
}
