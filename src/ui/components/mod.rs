//! Panels drawn by the terminal UI.

mod header;
mod history;
mod results;
mod status;
mod summary;

pub(crate) use header::{HeaderContext, render_header};
pub(crate) use history::render_history;
pub(crate) use results::{ResultsContext, render_results};
pub(crate) use status::render_status;
pub(crate) use summary::{SummaryContext, render_summary};

use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

/// Bordered panel with a title, highlighted when focused.
pub(crate) fn panel(title: &str, border: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(format!(" {title} "))
}

/// Text for a toggle affordance.
pub(crate) fn affordance(label: &str) -> String {
    format!("[{label}]")
}
