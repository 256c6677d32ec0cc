//! Multi-line text box with placeholder.
//!
//! Editing is append-only at the end of the current line: typed characters
//! extend it, Enter opens a new line, Backspace removes the last character or
//! steps back a line.

use kurbo::{Point, Rect, Size, Vec2};

use super::{WidgetState, is_printable};
use crate::binder::Anchored;
use crate::geometry;
use crate::input::{InputSnapshot, Key};

pub const MAX_LINES: usize = 10;
pub const MAX_LINE_LENGTH: usize = 127;

#[derive(Debug, Clone)]
pub struct TextBox {
    relative_offset: Vec2,
    bounds: Rect,
    lines: Vec<String>,
    placeholder: String,
    font_size: f64,
    state: WidgetState,
}

impl TextBox {
    pub fn new(offset: Vec2, size: Size, placeholder: impl Into<String>) -> Self {
        Self {
            relative_offset: offset,
            bounds: geometry::rect_at(offset.to_point(), size),
            lines: vec![String::new()],
            placeholder: placeholder.into(),
            font_size: 20.0,
            state: WidgetState::Normal,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Vertical distance between consecutive lines.
    pub fn line_spacing(&self) -> f64 {
        self.font_size + 5.0
    }

    pub fn is_active(&self) -> bool {
        self.state.is_editing()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) {
        if self.is_active() {
            self.apply_typing(input);
        }

        if input.is_primary_pressed() {
            let inside = geometry::contains(self.bounds, input.pointer_position());
            if inside != self.is_active() {
                log::debug!("text box {}", if inside { "focused" } else { "blurred" });
            }
            self.state = if inside {
                WidgetState::Editing
            } else {
                WidgetState::Normal
            };
        }
    }

    fn apply_typing<I: InputSnapshot + ?Sized>(&mut self, input: &I) {
        for ch in input.typed_text().chars() {
            match ch {
                '\n' | '\r' => self.new_line(),
                ch if is_printable(ch) => self.push_char(ch),
                _ => {}
            }
        }
        if input.is_key_pressed(Key::Enter) {
            self.new_line();
        }
        if input.is_key_pressed(Key::Backspace) {
            self.backspace();
        }
    }

    fn push_char(&mut self, ch: char) {
        if let Some(line) = self.lines.last_mut() {
            if line.chars().count() < MAX_LINE_LENGTH {
                line.push(ch);
            }
        }
    }

    fn new_line(&mut self) {
        if self.lines.len() < MAX_LINES {
            self.lines.push(String::new());
        }
    }

    fn backspace(&mut self) {
        let Some(line) = self.lines.last_mut() else {
            return;
        };
        if line.pop().is_none() && self.lines.len() > 1 {
            self.lines.pop();
        }
    }
}

impl Anchored for TextBox {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::{press, release};
    use crate::input::{InputState, KeyEvent};

    fn focused() -> (InputState, TextBox) {
        let mut input = InputState::new();
        let mut text_box = TextBox::new(Vec2::new(100.0, 100.0), Size::new(600.0, 300.0), "Enter your text here...");
        press(&mut input, 150.0, 150.0);
        text_box.update(&input);
        input.begin_frame();
        (input, text_box)
    }

    #[test]
    fn test_click_focuses_and_blurs() {
        let (mut input, mut text_box) = focused();
        assert!(text_box.is_active());

        release(&mut input, 150.0, 150.0);
        press(&mut input, 10.0, 10.0);
        text_box.update(&input);
        assert!(!text_box.is_active());
    }

    #[test]
    fn test_typing_and_new_lines() {
        let (mut input, mut text_box) = focused();

        input.handle_key_event(KeyEvent::Text("hi".to_string()));
        input.handle_key_event(KeyEvent::Pressed(Key::Enter));
        text_box.update(&input);
        input.begin_frame();

        input.handle_key_event(KeyEvent::Text("there".to_string()));
        text_box.update(&input);

        assert_eq!(text_box.text(), "hi\nthere");
        assert!(!text_box.is_empty());
    }

    #[test]
    fn test_backspace_steps_back_a_line() {
        let (mut input, mut text_box) = focused();

        input.handle_key_event(KeyEvent::Text("a".to_string()));
        input.handle_key_event(KeyEvent::Pressed(Key::Enter));
        text_box.update(&input);
        input.begin_frame();

        input.handle_key_event(KeyEvent::Pressed(Key::Backspace));
        text_box.update(&input);
        assert_eq!(text_box.lines(), &["a".to_string()]);
        input.begin_frame();

        input.handle_key_event(KeyEvent::Pressed(Key::Backspace));
        text_box.update(&input);
        assert!(text_box.is_empty());
    }

    #[test]
    fn test_inactive_box_ignores_typing() {
        let mut input = InputState::new();
        let mut text_box = TextBox::new(Vec2::ZERO, Size::new(100.0, 100.0), "");

        input.handle_key_event(KeyEvent::Text("x".to_string()));
        text_box.update(&input);
        assert!(text_box.is_empty());
    }

    #[test]
    fn test_line_limits() {
        let (mut input, mut text_box) = focused();

        input.handle_key_event(KeyEvent::Text("x".repeat(MAX_LINE_LENGTH + 20)));
        for _ in 0..MAX_LINES + 5 {
            input.handle_key_event(KeyEvent::Text("\n".to_string()));
        }
        text_box.update(&input);

        assert_eq!(text_box.lines()[0].len(), MAX_LINE_LENGTH);
        assert_eq!(text_box.lines().len(), MAX_LINES);
    }
}
