//! Core crate for the `scour` terminal research client.
//!
//! The state layer lives in [`session`], [`history`] and [`disclosure`];
//! [`controller`] wires them to user intents and [`ui`] puts a terminal
//! front-end on top. Everything below the UI can be driven headlessly.

pub mod app_dirs;
pub mod controller;
pub mod disclosure;
pub mod export;
pub mod history;
pub mod logging;
pub mod session;
#[cfg(test)]
mod testing;
pub mod ui;

pub use controller::{DisplayLimits, SessionController, StatusMessage};
pub use disclosure::{Disclosure, SnippetDisclosure};
pub use history::{HistoryEntry, HistoryStore};
pub use session::{SearchSession, SessionState};
