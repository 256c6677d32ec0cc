//! Heterogeneous window children.

use kurbo::{Point, Rect, Vec2};

use super::{Button, TextBox, TextEntry};
use crate::binder::Anchored;
use crate::input::InputSnapshot;

/// Outcome of updating a child for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildEvent {
    Clicked,
    Submitted,
}

/// A widget that can live inside a [`MenuWindow`](crate::MenuWindow).
#[derive(Debug, Clone)]
pub enum ChildWidget {
    Button(Button),
    TextBox(TextBox),
    TextEntry(TextEntry),
}

impl ChildWidget {
    pub fn update<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> Option<ChildEvent> {
        match self {
            ChildWidget::Button(button) => button.update(input).then_some(ChildEvent::Clicked),
            ChildWidget::TextBox(text_box) => {
                text_box.update(input);
                None
            }
            ChildWidget::TextEntry(entry) => entry.update(input).then_some(ChildEvent::Submitted),
        }
    }

    fn anchored(&self) -> &dyn Anchored {
        match self {
            ChildWidget::Button(button) => button,
            ChildWidget::TextBox(text_box) => text_box,
            ChildWidget::TextEntry(entry) => entry,
        }
    }

    fn anchored_mut(&mut self) -> &mut dyn Anchored {
        match self {
            ChildWidget::Button(button) => button,
            ChildWidget::TextBox(text_box) => text_box,
            ChildWidget::TextEntry(entry) => entry,
        }
    }
}

impl Anchored for ChildWidget {
    fn relative_offset(&self) -> Vec2 {
        self.anchored().relative_offset()
    }

    fn bounds(&self) -> Rect {
        self.anchored().bounds()
    }

    fn set_origin(&mut self, origin: Point) {
        self.anchored_mut().set_origin(origin);
    }
}

impl From<Button> for ChildWidget {
    fn from(button: Button) -> Self {
        ChildWidget::Button(button)
    }
}

impl From<TextBox> for ChildWidget {
    fn from(text_box: TextBox) -> Self {
        ChildWidget::TextBox(text_box)
    }
}

impl From<TextEntry> for ChildWidget {
    fn from(entry: TextEntry) -> Self {
        ChildWidget::TextEntry(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::bind_all;
    use crate::input::InputState;
    use crate::input::testing::{press, release};
    use crate::window::{MenuWindow, WindowConfig};
    use kurbo::Size;

    #[test]
    fn test_mixed_children_bind_and_update() {
        let mut input = InputState::new();
        let window = MenuWindow::new(WindowConfig::new(
            "Menu",
            Point::new(100.0, 100.0),
            Size::new(400.0, 300.0),
        ));
        let mut children: Vec<ChildWidget> = vec![
            Button::new("Click Me", Vec2::new(20.0, 40.0), Size::new(150.0, 50.0)).into(),
            TextEntry::new(Vec2::new(20.0, 100.0), Size::new(200.0, 30.0)).into(),
        ];

        bind_all(&mut children, &window);
        assert_eq!(children[0].bounds().origin(), Point::new(120.0, 140.0));
        assert_eq!(children[1].bounds().origin(), Point::new(120.0, 200.0));

        press(&mut input, 130.0, 150.0);
        assert_eq!(children[0].update(&input), None);
        release(&mut input, 130.0, 150.0);
        assert_eq!(children[0].update(&input), Some(ChildEvent::Clicked));
    }
}
