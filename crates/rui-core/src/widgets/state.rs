//! Widget state definitions.

/// The interaction state of a single widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// No interaction.
    #[default]
    Normal,
    /// Pointer is over the widget.
    Hovered,
    /// Pointer is over the widget with the primary button held.
    Pressed,
    /// Widget has keyboard focus (text widgets only).
    Editing,
}

impl WidgetState {
    /// Hover state for a pointer that is or isn't over the widget.
    pub fn from_pointer(over: bool, held: bool) -> Self {
        match (over, held) {
            (true, true) => Self::Pressed,
            (true, false) => Self::Hovered,
            (false, _) => Self::Normal,
        }
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, Self::Hovered | Self::Pressed)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pointer() {
        assert_eq!(WidgetState::from_pointer(false, true), WidgetState::Normal);
        assert_eq!(WidgetState::from_pointer(true, false), WidgetState::Hovered);
        assert!(WidgetState::from_pointer(true, true).is_hovered());
        assert!(WidgetState::from_pointer(true, true).is_pressed());
    }
}
