//! Leaf widgets.
//!
//! Every widget owns its bounds and updates from an [`InputSnapshot`](crate::InputSnapshot)
//! once per frame. Window children implement [`Anchored`](crate::Anchored) so the
//! binder can move them with their window.

mod button;
mod child;
mod dropdown;
mod progress;
mod radio;
mod slider;
mod state;
mod text_box;
mod text_entry;

pub use button::Button;
pub use child::{ChildEvent, ChildWidget};
pub use dropdown::{Dropdown, OPTION_HEIGHT};
pub use progress::{ProgressBar, ProgressMode};
pub use radio::{RadioGroup, RadioOption};
pub use slider::Slider;
pub use state::WidgetState;
pub use text_box::{MAX_LINE_LENGTH, MAX_LINES, TextBox};
pub use text_entry::TextEntry;

/// Characters text widgets accept from typed input.
pub(crate) fn is_printable(ch: char) -> bool {
    !ch.is_control()
}
