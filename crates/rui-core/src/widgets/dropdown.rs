//! Dropdown selector.

use kurbo::Rect;

use crate::geometry;
use crate::input::InputSnapshot;

/// Height of each option row below the header.
pub const OPTION_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct Dropdown {
    header: Rect,
    options: Vec<String>,
    placeholder: String,
    selected: Option<usize>,
    expanded: bool,
}

impl Dropdown {
    pub fn new(header: Rect, options: Vec<String>) -> Self {
        Self {
            header,
            options,
            placeholder: "Select an option".to_string(),
            selected: None,
            expanded: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn header(&self) -> Rect {
        self.header
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Text shown in the header: the selected option or the placeholder.
    pub fn display_text(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map_or(self.placeholder.as_str(), String::as_str)
    }

    pub fn option_rect(&self, index: usize) -> Rect {
        let y = self.header.y1 + index as f64 * OPTION_HEIGHT;
        Rect::new(self.header.x0, y, self.header.x1, y + OPTION_HEIGHT)
    }

    /// Returns `true` when an option was picked this frame.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        if !input.is_primary_pressed() {
            return false;
        }
        let pointer = input.pointer_position();
        if geometry::contains(self.header, pointer) {
            self.expanded = !self.expanded;
            return false;
        }
        if !self.expanded {
            return false;
        }

        let picked =
            (0..self.options.len()).find(|&index| geometry::contains(self.option_rect(index), pointer));
        match picked {
            Some(index) => {
                log::debug!("dropdown picked '{}'", self.options[index]);
                self.selected = Some(index);
                self.expanded = false;
                true
            }
            None => false,
        }
    }
}
