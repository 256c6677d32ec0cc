//! Single-line text entry.

use kurbo::{Point, Rect, Size, Vec2};

use super::{WidgetState, is_printable};
use crate::binder::Anchored;
use crate::geometry;
use crate::input::{InputSnapshot, Key};

#[derive(Debug, Clone)]
pub struct TextEntry {
    relative_offset: Vec2,
    bounds: Rect,
    text: String,
    placeholder: String,
    max_length: usize,
    state: WidgetState,
}

impl TextEntry {
    pub fn new(offset: Vec2, size: Size) -> Self {
        Self {
            relative_offset: offset,
            bounds: geometry::rect_at(offset.to_point(), size),
            text: String::new(),
            placeholder: String::new(),
            max_length: 64,
            state: WidgetState::Normal,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into().chars().take(self.max_length).collect();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_active(&self) -> bool {
        self.state.is_editing()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Update focus and apply typing. Returns `true` when Enter submits.
    ///
    /// Submitting also drops focus.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        let mut submitted = false;
        if self.is_active() {
            for ch in input.typed_text().chars().filter(|ch| is_printable(*ch)) {
                if self.text.chars().count() < self.max_length {
                    self.text.push(ch);
                }
            }
            if input.is_key_pressed(Key::Backspace) {
                self.text.pop();
            }
            if input.is_key_pressed(Key::Enter) {
                log::debug!("text entry submitted: {:?}", self.text);
                self.state = WidgetState::Normal;
                submitted = true;
            }
            if input.is_key_pressed(Key::Escape) {
                self.state = WidgetState::Normal;
            }
        }

        if input.is_primary_pressed() {
            let inside = geometry::contains(self.bounds, input.pointer_position());
            self.state = if inside {
                WidgetState::Editing
            } else {
                WidgetState::Normal
            };
        }
        submitted
    }
}

impl Anchored for TextEntry {
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
