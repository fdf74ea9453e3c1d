use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::StatusMessage;
use crate::ui::Theme;

pub(crate) const KEY_HINTS: &str =
    "Enter search/toggle · Tab focus · F2 country · F3 language · Ctrl+E export · Esc quit";

pub(crate) fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: Option<&StatusMessage>,
    theme: &Theme,
) {
    let line = match status {
        Some(message) if message.is_error() => {
            Line::from(Span::styled(message.text().to_string(), theme.error))
        }
        Some(message) => Line::from(Span::styled(message.text().to_string(), theme.accent)),
        None => Line::from(Span::styled(KEY_HINTS, theme.muted)),
    };
    frame.render_widget(Paragraph::new(line), area);
}
