//! Tray runtime abstraction.
//!
//! The droplet logic only needs four things from a system tray: a title, a
//! tooltip, clickable entries and an event loop. [`Tray`] captures exactly
//! that so the rest of the crate can be driven by a recording fake in tests,
//! by [`ConsoleTray`] on headless machines, or by the native tray icon when
//! the `native-tray` feature is enabled.

mod console;
#[cfg(feature = "native-tray")]
mod native;

pub use console::ConsoleTray;
#[cfg(feature = "native-tray")]
pub use native::NativeTray;

use std::fmt;
use thiserror::Error;

/// Errors from the tray runtime
#[derive(Debug, Error)]
pub enum TrayError {
    /// The OS tray or its event loop could not be created
    #[error("Failed to initialize tray: {0}")]
    Init(String),

    /// A menu entry could not be added
    #[error("Failed to update tray menu: {0}")]
    Menu(String),

    /// Reading user input failed
    #[error("Tray I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Identifier of a menu entry registered with a [`Tray`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItemId(pub String);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A system tray the application can draw into.
pub trait Tray {
    fn set_title(&mut self, title: &str);

    fn set_tooltip(&mut self, tooltip: &str);

    /// Append a clickable entry and return its id.
    fn add_menu_item(&mut self, label: &str) -> Result<MenuItemId, TrayError>;

    /// Block dispatching clicks to `on_click` until the user quits, then
    /// call `on_exit` once.
    fn run<C, E>(self, on_click: C, on_exit: E) -> Result<(), TrayError>
    where
        C: FnMut(&MenuItemId) + 'static,
        E: FnOnce() + 'static;
}
