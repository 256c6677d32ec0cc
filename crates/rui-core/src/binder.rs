//! Child widget position binding.
//!
//! Children never hold a reference to their window. Instead, once per frame
//! after the window's own update and before the child's, the owner pulls the
//! window's origin into each child:
//!
//! ```text
//! child.bounds.origin = window.origin + child.relative_offset
//! ```
//!
//! Skipping this step, or running it before the window update, leaves
//! children hit-testing against last frame's position.

use kurbo::{Point, Rect, Vec2};

use crate::window::MenuWindow;

/// A widget positioned relative to a parent window.
pub trait Anchored {
    /// Fixed offset from the parent's origin.
    fn relative_offset(&self) -> Vec2;

    /// Current absolute bounds.
    fn bounds(&self) -> Rect;

    /// Move the widget so its top-left sits at `origin`; size is unchanged.
    fn set_origin(&mut self, origin: Point);
}

/// Recompute `widget`'s absolute position from `window`'s current origin.
pub fn bind_position<W: Anchored + ?Sized>(widget: &mut W, window: &MenuWindow) {
    widget.set_origin(window.origin() + widget.relative_offset());
}

/// Bind every child in `children` to `window`.
pub fn bind_all<W: Anchored>(children: &mut [W], window: &MenuWindow) {
    for child in children {
        bind_position(child, window);
    }
}
