use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::components::{
    HeaderContext, ResultsContext, SummaryContext, panel, render_header, render_history,
    render_results, render_status, render_summary,
};
use super::{App, Focus};

const QUERY_TITLE: &str = "Query";
const HISTORY_WIDTH: u16 = 32;

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let [header_area, input_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let state = self.controller.state();
        render_header(
            frame,
            header_area,
            HeaderContext {
                country: self.controller.country(),
                ui_lang: self.controller.ui_lang(),
                loading: state.is_loading(),
                throbber_state: &self.throbber_state,
                theme: &self.theme,
            },
        );

        let [main_area, history_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(HISTORY_WIDTH)])
                .areas(body_area);

        let results_area = match self.controller.summary_view() {
            Some(view) => {
                let [summary_area, results_area] =
                    Layout::vertical([Constraint::Percentage(40), Constraint::Min(3)])
                        .areas(main_area);
                let source = state.top_result().map(|result| result.url.as_str());
                render_summary(
                    frame,
                    summary_area,
                    SummaryContext {
                        view: &view,
                        source,
                        scroll: self.summary_scroll,
                        focused: self.focus == Focus::Summary,
                        theme: &self.theme,
                    },
                );
                results_area
            }
            None => main_area,
        };

        let snippets = (0..state.results().len())
            .map(|index| self.controller.snippet_view(index))
            .collect();
        render_results(
            frame,
            results_area,
            ResultsContext {
                results: state.results(),
                snippets,
                selected: self.selected_result,
                loading: state.is_loading(),
                focused: self.focus == Focus::Results,
                throbber_state: &self.throbber_state,
                theme: &self.theme,
            },
        );

        render_history(
            frame,
            history_area,
            self.controller.history(),
            &mut self.history_state,
            self.focus == Focus::History,
            &self.theme,
        );

        render_status(frame, status_area, self.controller.status(), &self.theme);

        let focused = self.focus == Focus::Query;
        let block = panel(QUERY_TITLE, self.theme.border_style(focused));
        self.input.render(frame, input_area, block, focused);
    }
}
