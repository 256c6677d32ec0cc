//! RUI Core Library
//!
//! Platform-agnostic state and interaction logic for immediate-mode widgets
//! and the draggable, resizable, scrollable menu window.

pub mod binder;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod scroll;
pub mod widgets;
pub mod window;

pub use binder::{Anchored, bind_all, bind_position};
pub use controller::{DragController, PointerCapture, ResizeController};
pub use geometry::MinSize;
pub use input::{InputSnapshot, InputState, Key, KeyEvent, MouseButton, PointerEvent};
pub use scroll::{DEFAULT_SCROLL_SENSITIVITY, ScrollModel};
pub use widgets::{
    Button, ChildEvent, ChildWidget, Dropdown, ProgressBar, ProgressMode, RadioGroup, RadioOption,
    Slider, TextBox, TextEntry, WidgetState,
};
pub use window::{MenuWindow, WindowConfig, WindowMode};
