use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_truncate::UnicodeTruncateStr;

use super::header::THINKING;
use super::{affordance, panel};
use crate::disclosure::{SHOW_MORE, SnippetView};
use crate::export::wrap;
use crate::session::SearchResult;
use crate::ui::Theme;

pub(crate) const NO_RESULTS: &str = "No results yet - run a search.";
pub(crate) const NO_SNIPPET: &str = "No summary available.";
const SELECTED_MARKER: &str = "▌ ";
const MARKER_WIDTH: u16 = 2;

pub(crate) struct ResultsContext<'a> {
    pub results: &'a [SearchResult],
    /// Rendered snippet for each result, in the same order.
    pub snippets: Vec<Option<SnippetView<'a>>>,
    pub selected: usize,
    pub loading: bool,
    pub focused: bool,
    pub throbber_state: &'a ThrobberState,
    pub theme: &'a Theme,
}

/// Result cards: title, snippet disclosure and url.
pub(crate) fn render_results(frame: &mut Frame, area: Rect, ctx: ResultsContext<'_>) {
    let theme = ctx.theme;
    let title = if ctx.results.is_empty() {
        "Results".to_string()
    } else {
        format!("Results ({})", ctx.results.len())
    };
    let block = panel(&title, theme.border_style(ctx.focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if ctx.results.is_empty() {
        render_empty(frame, inner, ctx.loading, ctx.throbber_state, theme);
        return;
    }

    let width = usize::from(inner.width.saturating_sub(MARKER_WIDTH).max(1));
    let mut lines = Vec::new();
    let mut selected_span = (0, 0);

    for (index, (result, snippet)) in ctx.results.iter().zip(&ctx.snippets).enumerate() {
        let selected = index == ctx.selected;
        let start = lines.len();
        let mut card = card_lines(result, snippet.as_ref(), width, theme);
        if index + 1 < ctx.results.len() {
            card.push(Line::default());
        }

        let marker = if selected { SELECTED_MARKER } else { "  " };
        let marker_style = if ctx.focused { theme.selected } else { theme.muted };
        for line in card {
            let mut spans = vec![Span::styled(marker, marker_style)];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        if selected {
            selected_span = (start, lines.len());
        }
    }

    let (start, end) = selected_span;
    let height = usize::from(inner.height);
    let offset = start.min(end.saturating_sub(height));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn card_lines(
    result: &SearchResult,
    snippet: Option<&SnippetView<'_>>,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let (title, _) = result.title.unicode_truncate(width);
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme.header.add_modifier(Modifier::BOLD),
    )));

    match snippet {
        None => lines.push(Line::from(Span::styled(NO_SNIPPET, theme.muted))),
        Some(SnippetView::Preview { line, show_more }) => {
            let (preview, _) = line.unicode_truncate(width);
            lines.push(Line::from(preview.to_string()));
            if *show_more {
                lines.push(toggle_line(SHOW_MORE, theme.toggle));
            }
        }
        Some(SnippetView::Expanded { block, show_less }) => {
            lines.extend(wrap(&block.text, width).into_iter().map(Line::from));
            if let Some(label) = block.toggle_label {
                lines.push(toggle_line(label, theme.toggle));
            }
            lines.push(toggle_line(show_less, theme.toggle));
        }
    }

    if !result.url.is_empty() {
        let (url, _) = result.url.unicode_truncate(width);
        lines.push(Line::from(Span::styled(url.to_string(), theme.link)));
    }
    lines
}

fn toggle_line(label: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(affordance(label), style))
}

fn render_empty(
    frame: &mut Frame,
    area: Rect,
    loading: bool,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    let line = if loading {
        let spinner = Throbber::default()
            .style(theme.muted)
            .throbber_style(theme.accent);
        Line::from(vec![
            spinner.to_symbol_span(throbber_state),
            Span::styled(THINKING, theme.muted),
        ])
    } else {
        Line::from(Span::styled(NO_RESULTS, theme.empty_style()))
    };
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
