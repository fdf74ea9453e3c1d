use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_truncate::UnicodeTruncateStr;

use super::panel;
use crate::history::HistoryEntry;
use crate::ui::Theme;

pub(crate) const HISTORY_TITLE: &str = "Recent Searches";
pub(crate) const NO_HISTORY: &str = "No recent searches";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Recent searches, each with its query and local time.
pub(crate) fn render_history(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    state: &mut ListState,
    focused: bool,
    theme: &Theme,
) {
    let block = panel(HISTORY_TITLE, theme.border_style(focused));
    if entries.is_empty() {
        let empty = Paragraph::new(Span::styled(NO_HISTORY, theme.empty_style()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(block.inner(area).width.saturating_sub(2).max(1));
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (query, _) = entry.query.unicode_truncate(width);
            let time = entry.time.with_timezone(&Local).format(TIME_FORMAT);
            ListItem::new(vec![
                Line::from(query.to_string()),
                Line::from(Span::styled(time.to_string(), theme.muted)),
            ])
        })
        .collect();

    let highlight = if focused { theme.selected } else { theme.muted };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, area, state);
}
