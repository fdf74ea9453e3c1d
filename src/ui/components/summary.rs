use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{affordance, panel};
use crate::disclosure::BlockView;
use crate::export::{SUMMARY_HEADING, wrap};
use crate::ui::Theme;

pub(crate) struct SummaryContext<'a> {
    pub view: &'a BlockView<'a>,
    pub source: Option<&'a str>,
    pub scroll: u16,
    pub focused: bool,
    pub theme: &'a Theme,
}

/// The combined summary with its toggle and primary source link.
pub(crate) fn render_summary(frame: &mut Frame, area: Rect, ctx: SummaryContext<'_>) {
    let theme = ctx.theme;
    let block = panel(SUMMARY_HEADING, theme.border_style(ctx.focused));
    let inner = block.inner(area);
    let width = usize::from(inner.width.max(1));

    let mut lines: Vec<Line> = wrap(&ctx.view.text, width)
        .into_iter()
        .map(Line::from)
        .collect();
    if let Some(label) = ctx.view.toggle_label {
        lines.push(Line::from(Span::styled(affordance(label), theme.toggle)));
    }
    if let Some(source) = ctx.source.filter(|url| !url.is_empty()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(source.to_string(), theme.link)));
    }

    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((ctx.scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}
