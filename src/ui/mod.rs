//! Interactive terminal UI for `scour`.
//!
//! [`App`] wraps a [`SessionController`](crate::controller::SessionController)
//! with the widgets needed to drive it from the keyboard: the query editor,
//! focus handling, selections and the loading throbber. Rendering is split
//! into one component per panel.

mod actions;
mod components;
mod input;
mod render;
mod runtime;
mod state;
mod theme;

pub use input::QueryInput;
pub use runtime::run;
pub use state::{App, Focus};
pub use theme::Theme;
