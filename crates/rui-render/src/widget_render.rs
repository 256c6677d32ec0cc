//! Render passes for the leaf widgets.

use kurbo::{Point, Rect};
use rui_core::widgets::OPTION_HEIGHT;
use rui_core::{
    Anchored, Button, ChildWidget, Dropdown, ProgressBar, RadioGroup, Slider, TextBox, TextEntry,
    WidgetState,
};

use crate::renderer::Painter;
use crate::theme::Theme;

const LABEL_FONT_SIZE: f64 = 20.0;
const RADIO_FONT_SIZE: f64 = 16.0;
const TEXT_PADDING: f64 = 5.0;
const CARET_WIDTH: f64 = 2.0;

/// Draw `text` centred in `rect`.
fn draw_centered<P: Painter + ?Sized>(
    painter: &mut P,
    text: &str,
    rect: Rect,
    font_size: f64,
    color: peniko::Color,
) {
    let width = painter.measure_text(text, font_size);
    let origin = Point::new(
        rect.center().x - width / 2.0,
        rect.center().y - font_size / 2.0,
    );
    painter.draw_text(text, origin, font_size, color);
}

pub fn render_button<P: Painter + ?Sized>(painter: &mut P, button: &Button, theme: &Theme) {
    let color = match button.state() {
        WidgetState::Pressed => theme.button_pressed,
        WidgetState::Hovered => theme.button_hover,
        _ => theme.button,
    };
    let bounds = button.bounds();
    painter.fill_rect(bounds, color);
    draw_centered(painter, button.label(), bounds, LABEL_FONT_SIZE, theme.button_text);
}

fn render_input_frame<P: Painter + ?Sized>(painter: &mut P, bounds: Rect, active: bool, theme: &Theme) {
    painter.fill_rect(bounds, theme.input_background);
    let border = if active {
        theme.input_active_border
    } else {
        theme.border
    };
    painter.stroke_rect(bounds, 1.0, border);
}

/// Caret after `line` drawn at `origin`.
fn render_caret<P: Painter + ?Sized>(
    painter: &mut P,
    line: &str,
    origin: Point,
    font_size: f64,
    theme: &Theme,
) {
    let x = origin.x + painter.measure_text(line, font_size);
    painter.fill_rect(
        Rect::new(x, origin.y, x + CARET_WIDTH, origin.y + font_size),
        theme.text,
    );
}

pub fn render_text_box<P: Painter + ?Sized>(painter: &mut P, text_box: &TextBox, theme: &Theme) {
    let bounds = text_box.bounds();
    render_input_frame(painter, bounds, text_box.is_active(), theme);

    let font_size = text_box.font_size();
    let origin = Point::new(bounds.x0 + TEXT_PADDING, bounds.y0 + TEXT_PADDING);
    painter.push_clip(bounds);
    if text_box.is_empty() && !text_box.is_active() {
        painter.draw_text(text_box.placeholder(), origin, font_size, theme.placeholder);
    } else {
        let mut line_origin = origin;
        for line in text_box.lines() {
            painter.draw_text(line, line_origin, font_size, theme.text);
            line_origin.y += text_box.line_spacing();
        }
        if let (true, Some(last)) = (text_box.is_active(), text_box.lines().last()) {
            let last_origin = Point::new(line_origin.x, line_origin.y - text_box.line_spacing());
            render_caret(painter, last, last_origin, font_size, theme);
        }
    }
    painter.pop_clip();
}

pub fn render_text_entry<P: Painter + ?Sized>(painter: &mut P, entry: &TextEntry, theme: &Theme) {
    let bounds = entry.bounds();
    render_input_frame(painter, bounds, entry.is_active(), theme);

    let origin = Point::new(
        bounds.x0 + TEXT_PADDING,
        bounds.center().y - LABEL_FONT_SIZE / 2.0,
    );
    painter.push_clip(bounds);
    if entry.text().is_empty() && !entry.is_active() {
        painter.draw_text(entry.placeholder(), origin, LABEL_FONT_SIZE, theme.placeholder);
    } else {
        painter.draw_text(entry.text(), origin, LABEL_FONT_SIZE, theme.text);
        if entry.is_active() {
            render_caret(painter, entry.text(), origin, LABEL_FONT_SIZE, theme);
        }
    }
    painter.pop_clip();
}

pub fn render_slider<P: Painter + ?Sized>(painter: &mut P, slider: &Slider, theme: &Theme) {
    let bounds = slider.bounds();
    painter.fill_rect(bounds, theme.track);

    let x = bounds.x0 + slider.fraction() * bounds.width();
    let half = slider.handle_width() / 2.0;
    painter.fill_rect(Rect::new(x - half, bounds.y0, x + half, bounds.y1), theme.handle);

    if slider.shows_value() {
        draw_centered(painter, &slider.value().to_string(), bounds, LABEL_FONT_SIZE, theme.text);
    }
}

pub fn render_progress_bar<P: Painter + ?Sized>(painter: &mut P, bar: &ProgressBar, theme: &Theme) {
    let bounds = bar.bounds();
    painter.fill_rect(bounds, theme.track);

    let filled = bar.fraction() * bounds.width();
    if filled > 0.0 {
        painter.fill_rect(
            Rect::new(bounds.x0, bounds.y0, bounds.x0 + filled, bounds.y1),
            theme.progress_fill,
        );
    }

    if bar.shows_value() {
        let label = format!("{}%", bar.percentage());
        draw_centered(painter, &label, bounds, LABEL_FONT_SIZE, theme.text);
    }
}

pub fn render_radio_group<P: Painter + ?Sized>(painter: &mut P, group: &RadioGroup, theme: &Theme) {
    for (index, option) in group.options().iter().enumerate() {
        painter.fill_circle(option.center, option.size / 2.0, theme.radio_ring);
        if group.is_selected(index) {
            painter.fill_circle(option.center, option.size / 4.0, theme.radio_dot);
        }
        painter.draw_text(
            &option.label,
            Point::new(option.center.x + option.size, option.center.y - RADIO_FONT_SIZE / 2.0),
            RADIO_FONT_SIZE,
            theme.text,
        );
    }
}

pub fn render_dropdown<P: Painter + ?Sized>(painter: &mut P, dropdown: &Dropdown, theme: &Theme) {
    let header = dropdown.header();
    let expanded = dropdown.is_expanded();
    let fill = if expanded {
        theme.dropdown_header_expanded
    } else {
        theme.dropdown_header
    };
    painter.fill_rect(header, fill);
    painter.draw_text(
        dropdown.display_text(),
        Point::new(header.x0 + 10.0, header.y0 + 10.0),
        LABEL_FONT_SIZE,
        theme.dropdown_header_text,
    );

    // Arrow points up while the list is open.
    let tip = Point::new(header.x1 - 20.0, header.center().y);
    let arrow = if expanded {
        [
            Point::new(tip.x - 5.0, tip.y + 5.0),
            Point::new(tip.x + 5.0, tip.y + 5.0),
            Point::new(tip.x, tip.y - 5.0),
        ]
    } else {
        [
            Point::new(tip.x - 5.0, tip.y - 5.0),
            Point::new(tip.x + 5.0, tip.y - 5.0),
            Point::new(tip.x, tip.y + 5.0),
        ]
    };
    painter.fill_triangle(arrow, theme.dropdown_header_text);

    if !expanded {
        return;
    }
    for (index, option) in dropdown.options().iter().enumerate() {
        let rect = dropdown.option_rect(index);
        let color = if dropdown.selected() == Some(index) {
            theme.dropdown_selected
        } else {
            theme.dropdown_option
        };
        painter.fill_rect(rect, color);
        painter.draw_text(
            option,
            Point::new(rect.x0 + 10.0, rect.y0 + (OPTION_HEIGHT - LABEL_FONT_SIZE) / 2.0),
            LABEL_FONT_SIZE,
            theme.text,
        );
    }
}

pub fn render_child<P: Painter + ?Sized>(painter: &mut P, child: &ChildWidget, theme: &Theme) {
    match child {
        ChildWidget::Button(button) => render_button(painter, button, theme),
        ChildWidget::TextBox(text_box) => render_text_box(painter, text_box, theme),
        ChildWidget::TextEntry(entry) => render_text_entry(painter, entry, theme),
    }
}
