//! Translation from winit events into core input types.

use rui_core::{Key, MouseButton, DEFAULT_SCROLL_SENSITIVITY};
use winit::event::MouseScrollDelta;
use winit::keyboard::{Key as WinitKey, NamedKey};

pub fn map_mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Vertical wheel motion in lines; positive scrolls toward the top.
///
/// Pixel deltas (trackpads) are converted at one line per
/// [`DEFAULT_SCROLL_SENSITIVITY`] pixels.
pub fn wheel_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(pos) => pos.y / DEFAULT_SCROLL_SENSITIVITY,
    }
}

pub fn map_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Backspace) => Some(Key::Backspace),
        WinitKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        _ => None,
    }
}

/// Committed text with control characters removed; Enter and Backspace
/// arrive through [`map_key`] instead.
pub fn printable_text(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}
