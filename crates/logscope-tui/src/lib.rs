//! TUI components for logscope
//!
//! This crate provides the terminal user interface for logscope,
//! including UI state, keybindings, event handling, and rendering.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::{Action, AppState};
pub use config::{KeyBinding, KeyBindings, KeyContext};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{HelpOverlay, StatusBar, console_hints};
pub use ui::screens::ConsoleScreen;
pub use ui::Theme;
