//! Menu window render pass.

use kurbo::{Point, Rect, Size};
use rui_core::MenuWindow;
use rui_core::geometry;

use crate::renderer::Painter;
use crate::theme::Theme;

/// Title text size in the title bar.
pub const TITLE_FONT_SIZE: f64 = 20.0;
const ROW_FONT_SIZE: f64 = 20.0;
/// Gap between a thumb and its track.
const THUMB_INSET: f64 = 2.0;

/// Layout of the demo content rows inside a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub count: usize,
    /// Distance between the tops of consecutive rows.
    pub pitch: f64,
    pub height: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            count: 16,
            pitch: 50.0,
            height: 40.0,
        }
    }
}

impl RowLayout {
    /// As many rows as fit in `content_height`.
    pub fn filling(content_height: f64) -> Self {
        let layout = Self::default();
        Self {
            count: (content_height.max(0.0) / layout.pitch) as usize,
            ..layout
        }
    }

    pub fn content_height(&self) -> f64 {
        self.count as f64 * self.pitch
    }
}

/// Draw a window: chrome first, then its rows clipped to the content area.
pub fn render_menu_window<P: Painter + ?Sized>(
    painter: &mut P,
    window: &MenuWindow,
    theme: &Theme,
    rows: &RowLayout,
) {
    let bounds = window.bounds();
    painter.fill_rect(bounds, theme.window_background);

    if window.shows_title() {
        painter.fill_rect(window.title_bar_rect(), theme.title_bar);
        painter.draw_text(
            window.title(),
            Point::new(bounds.x0 + 5.0, bounds.y0 + 5.0),
            TITLE_FONT_SIZE,
            theme.title_text,
        );
    }

    if window.is_resizable() {
        painter.fill_rect(window.resize_handle_rect(), theme.resize_handle);
    }

    if window.is_scroll_active() {
        painter.fill_rect(window.scroll_track(), theme.scrollbar_track);
        if let Some(thumb) = shrink(window.scroll_thumb(), THUMB_INSET) {
            painter.fill_rect(thumb, theme.scrollbar_thumb);
        }
    }

    render_rows(painter, window, theme, rows);
}

fn render_rows<P: Painter + ?Sized>(
    painter: &mut P,
    window: &MenuWindow,
    theme: &Theme,
    rows: &RowLayout,
) {
    let clip = window.content_clip();
    if clip.is_zero_area() {
        return;
    }
    let visible = window.visible_rows(rows.pitch, rows.height, rows.count);
    log::trace!("drawing rows {visible:?}");

    let bounds = window.bounds();
    painter.push_clip(clip);
    for index in visible {
        let top = window.row_top(index, rows.pitch);
        let row = geometry::rect_at(
            Point::new(bounds.x0 + 10.0, top),
            Size::new(bounds.width() - 30.0, rows.height),
        );
        let color = if index % 2 == 0 {
            theme.row_even
        } else {
            theme.row_odd
        };
        painter.fill_rect(row, color);
        painter.draw_text(
            &format!("Item {}", index + 1),
            Point::new(bounds.x0 + 15.0, top + 10.0),
            ROW_FONT_SIZE,
            theme.row_text,
        );
    }
    painter.pop_clip();
}

/// `rect` inset by `by` on every side, or `None` if nothing is left.
fn shrink(rect: Rect, by: f64) -> Option<Rect> {
    let inner = Rect::new(rect.x0 + by, rect.y0 + by, rect.x1 - by, rect.y1 - by);
    (inner.width() > 0.0 && inner.height() > 0.0).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use rui_core::{WindowConfig, WindowMode};

    fn menu() -> MenuWindow {
        MenuWindow::new(
            WindowConfig::new("Menu Window", Point::new(100.0, 100.0), Size::new(400.0, 300.0))
                .with_mode(WindowMode::Resizable)
                .with_scroll(800.0),
        )
    }

    #[test]
    fn test_render_order() {
        let theme = Theme::default();
        let window = menu();
        let mut list = DrawList::new();

        render_menu_window(&mut list, &window, &theme, &RowLayout::default());

        let commands = list.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: window.bounds(),
                color: theme.window_background
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: window.title_bar_rect(),
                color: theme.title_bar
            }
        );
        assert!(matches!(&commands[2], DrawCommand::Text { text, .. } if text == "Menu Window"));
        assert_eq!(
            commands[3],
            DrawCommand::FillRect {
                rect: window.resize_handle_rect(),
                color: theme.resize_handle
            }
        );
        assert_eq!(
            commands[4],
            DrawCommand::FillRect {
                rect: window.scroll_track(),
                color: theme.scrollbar_track
            }
        );
        assert!(matches!(commands[5], DrawCommand::FillRect { color, .. } if color == theme.scrollbar_thumb));
        assert_eq!(commands[6], DrawCommand::PushClip(window.content_clip()));
        assert_eq!(commands.last(), Some(&DrawCommand::PopClip));
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn test_only_visible_rows_drawn() {
        let theme = Theme::default();
        let window = menu();
        let mut list = DrawList::new();

        render_menu_window(&mut list, &window, &theme, &RowLayout::default());

        let labels: Vec<_> = list.texts().skip(1).collect();
        assert_eq!(labels, vec!["Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6"]);
    }

    #[test]
    fn test_plain_window_has_no_chrome() {
        let theme = Theme::default();
        let window = MenuWindow::new(
            WindowConfig::new("Plain", Point::new(0.0, 0.0), Size::new(200.0, 100.0))
                .with_mode(WindowMode::Fixed)
                .with_title_bar(false),
        );
        let mut list = DrawList::new();

        render_menu_window(&mut list, &window, &theme, &RowLayout { count: 0, ..RowLayout::default() });

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::FillRect {
                    rect: window.bounds(),
                    color: theme.window_background
                },
                DrawCommand::PushClip(window.content_clip()),
                DrawCommand::PopClip,
            ]
        );
    }

    #[test]
    fn test_row_layout_filling() {
        let rows = RowLayout::filling(800.0);
        assert_eq!(rows.count, 16);
        assert!((rows.content_height() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shrink() {
        assert_eq!(shrink(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0), Some(Rect::new(2.0, 2.0, 8.0, 8.0)));
        assert_eq!(shrink(Rect::new(0.0, 0.0, 3.0, 10.0), 2.0), None);
    }
}
