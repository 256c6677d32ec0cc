//! The demo scene: a menu window with anchored children, plus a column of
//! standalone widgets.

use kurbo::{Point, Rect, Size, Vec2};
use rui_core::{
    Button, ChildEvent, ChildWidget, Dropdown, InputSnapshot, MenuWindow, ProgressBar,
    ProgressMode, RadioGroup, RadioOption, Slider, TextBox, TextEntry, WindowConfig, WindowMode,
    bind_all,
};
use rui_render::{
    Painter, RowLayout, Theme, render_child, render_dropdown, render_menu_window,
    render_progress_bar, render_radio_group, render_slider, render_text_box,
};

/// Height of the scrollable content in the menu window.
const CONTENT_HEIGHT: f64 = 800.0;

/// Something the user did during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    Child { index: usize, event: ChildEvent },
    SliderChanged(i32),
    RadioChanged(Option<usize>),
    DropdownPicked(usize),
}

pub struct Demo {
    window: MenuWindow,
    rows: RowLayout,
    children: Vec<ChildWidget>,
    notes: TextBox,
    slider: Slider,
    manual_progress: ProgressBar,
    auto_progress: ProgressBar,
    radio: RadioGroup,
    dropdown: Dropdown,
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo {
    pub fn new() -> Self {
        let window = MenuWindow::new(
            WindowConfig::new("Menu Window", Point::new(100.0, 100.0), Size::new(400.0, 300.0))
                .with_mode(WindowMode::Resizable)
                .with_scroll(CONTENT_HEIGHT),
        );
        let mut children: Vec<ChildWidget> = vec![
            Button::new("Click Me", Vec2::new(20.0, 40.0), Size::new(100.0, 50.0)).into(),
            TextEntry::new(Vec2::new(140.0, 50.0), Size::new(200.0, 30.0))
                .with_placeholder("Name")
                .into(),
        ];
        bind_all(&mut children, &window);

        let radio = RadioGroup::new(
            (0..3)
                .map(|i| {
                    RadioOption::new(
                        Point::new(540.0, 300.0 + f64::from(i) * 40.0),
                        20.0,
                        format!("Option {}", i + 1),
                    )
                })
                .collect(),
        );

        Self {
            window,
            rows: RowLayout::filling(CONTENT_HEIGHT),
            children,
            notes: TextBox::new(Vec2::new(100.0, 430.0), Size::new(380.0, 150.0), "Enter your text here..."),
            slider: Slider::new(Rect::new(520.0, 120.0, 760.0, 140.0), 0, 100, 50),
            manual_progress: ProgressBar::new(
                Rect::new(520.0, 170.0, 760.0, 200.0),
                0,
                100,
                0,
                ProgressMode::Manual,
            ),
            auto_progress: ProgressBar::new(
                Rect::new(520.0, 220.0, 760.0, 250.0),
                0,
                100,
                0,
                ProgressMode::Automatic,
            ),
            radio,
            dropdown: Dropdown::new(
                Rect::new(520.0, 400.0, 720.0, 440.0),
                (1..=5).map(|n| format!("Option {n}")).collect(),
            ),
        }
    }

    pub fn window(&self) -> &MenuWindow {
        &self.window
    }

    pub fn children(&self) -> &[ChildWidget] {
        &self.children
    }

    pub fn auto_progress(&self) -> &ProgressBar {
        &self.auto_progress
    }

    /// Run one frame of interaction.
    ///
    /// The window updates first so children bind to this frame's origin
    /// before they hit-test.
    pub fn frame<I: InputSnapshot + ?Sized>(&mut self, input: &I) -> Vec<DemoEvent> {
        let mut events = Vec::new();

        self.window.update(input);
        bind_all(&mut self.children, &self.window);

        for (index, child) in self.children.iter_mut().enumerate() {
            if let Some(event) = child.update(input) {
                events.push(DemoEvent::Child { index, event });
            }
        }

        self.notes.update(input);
        if self.slider.update(input) {
            events.push(DemoEvent::SliderChanged(self.slider.value()));
        }
        self.manual_progress.update(input);
        self.auto_progress.update(input);
        if self.radio.update(input) {
            events.push(DemoEvent::RadioChanged(self.radio.selected()));
        }
        if self.dropdown.update(input) {
            if let Some(index) = self.dropdown.selected() {
                events.push(DemoEvent::DropdownPicked(index));
            }
        }

        for event in &events {
            match event {
                DemoEvent::Child {
                    event: ChildEvent::Clicked,
                    ..
                } => log::info!("Button was clicked!"),
                other => log::info!("{other:?}"),
            }
        }
        events
    }

    /// Draw the scene. The dropdown goes last so its open list stays on top.
    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P, theme: &Theme) {
        render_menu_window(painter, &self.window, theme, &self.rows);
        for child in &self.children {
            render_child(painter, child, theme);
        }

        render_text_box(painter, &self.notes, theme);
        render_slider(painter, &self.slider, theme);
        render_progress_bar(painter, &self.manual_progress, theme);
        render_progress_bar(painter, &self.auto_progress, theme);
        render_radio_group(painter, &self.radio, theme);
        render_dropdown(painter, &self.dropdown, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rui_core::{Anchored, InputState, MouseButton, PointerEvent};
    use rui_render::{DrawCommand, DrawList};

    fn press(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    fn move_to(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }

    fn release(input: &mut InputState, x: f64, y: f64) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    #[test]
    fn test_children_follow_window_in_same_frame() {
        let mut input = InputState::new();
        let mut demo = Demo::new();

        press(&mut input, 150.0, 110.0);
        demo.frame(&input);
        move_to(&mut input, 200.0, 150.0);
        demo.frame(&input);

        assert_eq!(demo.window().origin(), Point::new(150.0, 140.0));
        assert_eq!(demo.children()[0].bounds().origin(), Point::new(170.0, 180.0));
        assert_eq!(demo.children()[1].bounds().origin(), Point::new(290.0, 190.0));
    }

    #[test]
    fn test_child_button_click() {
        let mut input = InputState::new();
        let mut demo = Demo::new();

        press(&mut input, 130.0, 150.0);
        assert!(demo.frame(&input).is_empty());
        release(&mut input, 130.0, 150.0);
        assert_eq!(
            demo.frame(&input),
            vec![DemoEvent::Child {
                index: 0,
                event: ChildEvent::Clicked
            }]
        );
    }

    #[test]
    fn test_standalone_widgets_report_changes() {
        let mut input = InputState::new();
        let mut demo = Demo::new();

        press(&mut input, 580.0, 130.0);
        assert_eq!(demo.frame(&input), vec![DemoEvent::SliderChanged(25)]);
        release(&mut input, 580.0, 130.0);
        demo.frame(&input);

        press(&mut input, 540.0, 340.0);
        assert_eq!(demo.frame(&input), vec![DemoEvent::RadioChanged(Some(1))]);
    }

    #[test]
    fn test_auto_progress_advances_every_frame() {
        let input = InputState::new();
        let mut demo = Demo::new();

        for _ in 0..3 {
            demo.frame(&input);
        }
        assert_eq!(demo.auto_progress().value(), 3);
    }

    #[test]
    fn test_render_window_before_children() {
        let demo = Demo::new();
        let theme = Theme::default();
        let mut list = DrawList::new();

        demo.render(&mut list, &theme);

        let commands = list.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: demo.window().bounds(),
                color: theme.window_background
            }
        );
        let pop = commands
            .iter()
            .position(|command| *command == DrawCommand::PopClip)
            .unwrap();
        let button = commands
            .iter()
            .position(|command| {
                *command
                    == DrawCommand::FillRect {
                        rect: demo.children()[0].bounds(),
                        color: theme.button,
                    }
            })
            .unwrap();
        assert!(pop < button);
        assert_eq!(list.clip_depth(), 0);
    }
}
