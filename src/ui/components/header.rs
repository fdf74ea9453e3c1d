use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::session::{Country, UiLanguage};
use crate::ui::Theme;

pub(crate) const TITLE: &str = "scour";
pub(crate) const THINKING: &str = "Thinking";

pub(crate) struct HeaderContext<'a> {
    pub country: Country,
    pub ui_lang: UiLanguage,
    pub loading: bool,
    pub throbber_state: &'a ThrobberState,
    pub theme: &'a Theme,
}

/// Title, both selectors and the loading indicator on one row.
pub(crate) fn render_header(frame: &mut Frame, area: Rect, ctx: HeaderContext<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = ctx.theme;

    let selectors = Line::from(vec![
        Span::styled(TITLE, theme.header),
        Span::raw("  "),
        Span::styled("Country ", theme.muted),
        Span::styled(
            format!("{} ({})", ctx.country.label(), ctx.country.code()),
            theme.accent,
        ),
        Span::styled(" [F2]", theme.muted),
        Span::raw("  "),
        Span::styled("Language ", theme.muted),
        Span::styled(ctx.ui_lang.code(), theme.accent),
        Span::styled(" [F3]", theme.muted),
    ]);

    let mut indicator = Line::default();
    if ctx.loading {
        let spinner = Throbber::default()
            .style(theme.muted)
            .throbber_style(theme.accent);
        indicator.spans.push(spinner.to_symbol_span(ctx.throbber_state));
        indicator.spans.push(Span::styled(THINKING, theme.muted));
    }

    let indicator_width = indicator.width() as u16;
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(indicator_width)]).areas(area);
    frame.render_widget(Paragraph::new(selectors), left);
    if indicator_width > 0 {
        frame.render_widget(Paragraph::new(indicator), right);
    }
}
