//! Colour themes.

use peniko::Color;

/// Every colour the render passes use.
///
/// A theme is passed into each render call; nothing reads colours from
/// global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Clear colour for the whole frame.
    pub background: Color,
    pub text: Color,
    pub placeholder: Color,
    pub border: Color,

    pub window_background: Color,
    pub title_bar: Color,
    pub title_text: Color,
    pub resize_handle: Color,
    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
    /// Content rows alternate between these two.
    pub row_even: Color,
    pub row_odd: Color,
    pub row_text: Color,

    pub button: Color,
    pub button_hover: Color,
    pub button_pressed: Color,
    pub button_text: Color,

    pub input_background: Color,
    pub input_active_border: Color,

    pub track: Color,
    pub handle: Color,
    pub progress_fill: Color,
    pub radio_ring: Color,
    pub radio_dot: Color,

    pub dropdown_header: Color,
    pub dropdown_header_expanded: Color,
    pub dropdown_header_text: Color,
    pub dropdown_option: Color,
    pub dropdown_selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let light_gray = Color::from_rgba8(200, 200, 200, 255);
        let gray = Color::from_rgba8(130, 130, 130, 255);
        let dark_gray = Color::from_rgba8(80, 80, 80, 255);
        let ray_white = Color::from_rgba8(245, 245, 245, 255);
        let blue = Color::from_rgba8(0, 121, 241, 255);
        let sky_blue = Color::from_rgba8(102, 191, 255, 255);

        Self {
            background: ray_white,
            text: Color::BLACK,
            placeholder: gray,
            border: dark_gray,

            window_background: light_gray,
            title_bar: dark_gray,
            title_text: ray_white,
            resize_handle: dark_gray,
            scrollbar_track: gray,
            scrollbar_thumb: dark_gray,
            row_even: blue,
            row_odd: Color::from_rgba8(0, 228, 48, 255),
            row_text: ray_white,

            button: blue,
            button_hover: sky_blue,
            button_pressed: Color::from_rgba8(0, 82, 172, 255),
            button_text: Color::WHITE,

            input_background: Color::WHITE,
            input_active_border: blue,

            track: light_gray,
            handle: dark_gray,
            progress_fill: Color::from_rgba8(0, 117, 44, 255),
            radio_ring: dark_gray,
            radio_dot: blue,

            dropdown_header: light_gray,
            dropdown_header_expanded: dark_gray,
            dropdown_header_text: Color::WHITE,
            dropdown_option: light_gray,
            dropdown_selected: sky_blue,
        }
    }
}

impl Theme {
    /// Dark variant of the default palette.
    pub fn dark() -> Self {
        let panel = Color::from_rgba8(45, 45, 48, 255);
        let raised = Color::from_rgba8(62, 62, 66, 255);
        let accent = Color::from_rgba8(59, 130, 246, 255);
        let text = Color::from_rgba8(230, 230, 230, 255);

        Self {
            background: Color::from_rgba8(30, 30, 30, 255),
            text,
            placeholder: Color::from_rgba8(140, 140, 140, 255),
            border: Color::from_rgba8(90, 90, 95, 255),

            window_background: panel,
            title_bar: Color::from_rgba8(25, 25, 28, 255),
            title_text: text,
            resize_handle: accent,
            scrollbar_track: raised,
            scrollbar_thumb: Color::from_rgba8(110, 110, 115, 255),
            row_even: Color::from_rgba8(37, 99, 235, 255),
            row_odd: Color::from_rgba8(22, 163, 74, 255),
            row_text: Color::WHITE,

            button: accent,
            button_hover: Color::from_rgba8(96, 165, 250, 255),
            button_pressed: Color::from_rgba8(29, 78, 216, 255),
            button_text: Color::WHITE,

            input_background: raised,
            input_active_border: accent,

            track: raised,
            handle: Color::from_rgba8(160, 160, 165, 255),
            progress_fill: Color::from_rgba8(22, 163, 74, 255),
            radio_ring: Color::from_rgba8(160, 160, 165, 255),
            radio_dot: accent,

            dropdown_header: raised,
            dropdown_header_expanded: Color::from_rgba8(25, 25, 28, 255),
            dropdown_header_text: text,
            dropdown_option: raised,
            dropdown_selected: accent,
        }
    }
}
