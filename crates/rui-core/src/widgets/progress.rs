//! Progress bar, either self-advancing or dragged by hand.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use super::slider::value_at;
use crate::controller::{DragController, PointerCapture};
use crate::input::InputSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressMode {
    /// Advances by one every update and wraps back to the minimum.
    #[default]
    Automatic,
    /// Set by pressing and dragging across the bar.
    Manual,
}

#[derive(Debug, Clone)]
pub struct ProgressBar {
    bounds: Rect,
    min: i32,
    max: i32,
    value: i32,
    show_value: bool,
    mode: ProgressMode,
    drag: DragController,
}

impl ProgressBar {
    pub fn new(bounds: Rect, min: i32, max: i32, value: i32, mode: ProgressMode) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            bounds,
            min,
            max,
            value: value.clamp(min, max),
            show_value: true,
            mode,
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

    pub fn mode(&self) -> ProgressMode {
        self.mode
    }

    pub fn shows_value(&self) -> bool {
        self.show_value
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn fraction(&self) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (f64::from(self.value) - f64::from(self.min)) / (f64::from(self.max) - f64::from(self.min))
    }

    /// Whole percent complete.
    pub fn percentage(&self) -> i32 {
        (self.fraction() * 100.0) as i32
    }

    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) {
        match self.mode {
            ProgressMode::Automatic => {
                if self.value >= self.max {
                    log::trace!("progress wrapped");
                    self.value = self.min;
                } else {
                    self.value += 1;
                }
            }
            ProgressMode::Manual => {
                if self.drag.step(input, self.bounds, self.bounds.origin()).is_some() {
                    self.value =
                        value_at(self.bounds, input.pointer_position(), self.min, self.max);
                }
            }
        }
    }
}
