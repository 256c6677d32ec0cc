//! RUI Demo
//!
//! Application shell that drives the widget toolkit from winit events and
//! draws it with vello.

#[cfg(feature = "native")]
mod app;
mod demo;
pub mod input_map;

#[cfg(feature = "native")]
pub use app::{App, AppConfig};
pub use demo::{Demo, DemoEvent};
