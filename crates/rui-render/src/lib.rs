//! RUI Render Library
//!
//! Painter abstraction and render passes for RUI windows and widgets.
//! The default painter uses Vello for GPU-accelerated rendering.

mod draw_list;
mod renderer;
mod theme;
mod widget_render;
mod window_render;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use draw_list::{DrawCommand, DrawList};
pub use renderer::{Painter, RenderContext, RenderResult, RendererError};
pub use theme::Theme;
pub use widget_render::{
    render_button, render_child, render_dropdown, render_progress_bar, render_radio_group,
    render_slider, render_text_box, render_text_entry,
};
pub use window_render::{RowLayout, TITLE_FONT_SIZE, render_menu_window};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloPainter;
