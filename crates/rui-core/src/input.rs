//! Per-frame input snapshot consumed by windows and widgets.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Wheel motion in lines; positive `y` scrolls content up.
    Scroll {
        position: Point,
        delta: Vec2,
    },
}

/// Keys the text widgets react to. Printable input arrives as text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
}

/// Keyboard event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
    /// Committed text (already composed by the platform).
    Text(String),
}

/// Read-only view of one frame's input.
///
/// Windows and widgets only ever read through this trait, so any backend
/// that can answer these questions can drive them.
pub trait InputSnapshot {
    /// Current pointer position in screen coordinates.
    fn pointer_position(&self) -> Point;
    /// Whether the primary button is held right now.
    fn is_primary_down(&self) -> bool;
    /// Whether the primary button went down this frame.
    fn is_primary_pressed(&self) -> bool;
    /// Whether the primary button went up this frame.
    fn is_primary_released(&self) -> bool;
    /// Vertical wheel delta for this frame.
    fn wheel_delta(&self) -> f64;

    /// Text typed this frame.
    fn typed_text(&self) -> &str {
        ""
    }

    /// Whether `key` went down this frame.
    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }
}

/// Tracks the current input state across frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in screen coordinates.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Buttons that were just pressed this frame.
    just_pressed_buttons: HashSet<MouseButton>,
    /// Buttons that were just released this frame.
    just_released_buttons: HashSet<MouseButton>,
    /// Accumulated scroll delta since last frame.
    pub scroll_delta: Vec2,
    /// Keys that were just pressed this frame.
    just_pressed_keys: HashSet<Key>,
    /// Text committed since last frame.
    text: String,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call between frames to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_buttons.clear();
        self.just_released_buttons.clear();
        self.just_pressed_keys.clear();
        self.scroll_delta = Vec2::ZERO;
        self.text.clear();
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                if self.pressed_buttons.insert(button) {
                    self.just_pressed_buttons.insert(button);
                }
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                if self.pressed_buttons.remove(&button) {
                    self.just_released_buttons.insert(button);
                }
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
            }
            PointerEvent::Scroll { position, delta } => {
                self.pointer_position = position;
                self.scroll_delta += delta;
            }
        }
    }

    /// Process a key event.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => {
                self.just_pressed_keys.insert(key);
            }
            KeyEvent::Released(_) => {}
            KeyEvent::Text(text) => self.text.push_str(&text),
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a button was just pressed this frame.
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed_buttons.contains(&button)
    }

    /// Check if a button was just released this frame.
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released_buttons.contains(&button)
    }
}

impl InputSnapshot for InputState {
    fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    fn is_primary_down(&self) -> bool {
        self.is_button_pressed(MouseButton::Left)
    }

    fn is_primary_pressed(&self) -> bool {
        self.is_button_just_pressed(MouseButton::Left)
    }

    fn is_primary_released(&self) -> bool {
        self.is_button_just_released(MouseButton::Left)
    }

    fn wheel_delta(&self) -> f64 {
        self.scroll_delta.y
    }

    fn typed_text(&self) -> &str {
        &self.text
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Input sequence helpers shared by the core tests.

    use super::*;

    pub fn press(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    pub fn move_to(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }

    pub fn release(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    pub fn wheel(input: &mut InputState, lines: f64) {
        input.begin_frame();
        let position = input.pointer_position;
        input.handle_pointer_event(PointerEvent::Scroll {
            position,
            delta: Vec2::new(0.0, lines),
        });
    }
}
