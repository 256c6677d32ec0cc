//! Mutually exclusive radio options.

use kurbo::{Point, Rect, Size};

use crate::geometry;
use crate::input::InputSnapshot;

#[derive(Debug, Clone)]
pub struct RadioOption {
    pub center: Point,
    /// Diameter of the outer circle; also the side of the square hit area.
    pub size: f64,
    pub label: String,
}

impl RadioOption {
    pub fn new(center: Point, size: f64, label: impl Into<String>) -> Self {
        Self {
            center,
            size,
            label: label.into(),
        }
    }

    pub fn hit_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(self.size, self.size))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    options: Vec<RadioOption>,
    selected: Option<usize>,
}

impl RadioGroup {
    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Returns `true` when the selection changed this frame.
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> bool {
        if !input.is_primary_pressed() {
            return false;
        }
        let pointer = input.pointer_position();
        let Some(index) = self
            .options
            .iter()
            .position(|option| geometry::contains(option.hit_rect(), pointer))
        else {
            return false;
        };

        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        log::debug!("radio selection: {:?}", self.selected);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::input::testing::{press, release};

    fn group() -> RadioGroup {
        RadioGroup::new(vec![
            RadioOption::new(Point::new(100.0, 100.0), 20.0, "Option 1"),
            RadioOption::new(Point::new(100.0, 150.0), 20.0, "Option 2"),
            RadioOption::new(Point::new(100.0, 200.0), 20.0, "Option 3"),
        ])
    }

    #[test]
    fn test_exclusive_selection() {
        let mut input = InputState::new();
        let mut group = group();
        assert_eq!(group.selected(), None);

        press(&mut input, 95.0, 145.0);
        assert!(group.update(&input));
        assert_eq!(group.selected(), Some(1));

        release(&mut input, 95.0, 145.0);
        assert!(!group.update(&input));
        press(&mut input, 105.0, 205.0);
        assert!(group.update(&input));
        assert_eq!(group.selected(), Some(2));
        assert!(!group.is_selected(1));
    }

    #[test]
    fn test_reclick_deselects() {
        let mut input = InputState::new();
        let mut group = group();

        press(&mut input, 100.0, 100.0);
        group.update(&input);
        release(&mut input, 100.0, 100.0);
        group.update(&input);
        press(&mut input, 100.0, 100.0);
        group.update(&input);
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn test_hit_area_is_square() {
        let mut input = InputState::new();
        let mut group = group();

        // Corner of the square, outside the drawn circle.
        press(&mut input, 91.0, 91.0);
        assert!(group.update(&input));
        release(&mut input, 91.0, 91.0);
        group.update(&input);

        press(&mut input, 111.0, 100.0);
        assert!(!group.update(&input));
        assert_eq!(group.selected(), Some(0));
    }
}
