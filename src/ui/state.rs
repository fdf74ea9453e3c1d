use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::QueryInput;
use super::theme::Theme;
use crate::controller::SessionController;

/// Panel receiving key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Query,
    Summary,
    Results,
    History,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Query, Focus::Summary, Focus::Results, Focus::History];

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Aggregate state of the terminal UI.
pub struct App<'a> {
    pub(crate) controller: SessionController,
    pub(crate) input: QueryInput<'a>,
    pub(crate) focus: Focus,
    pub(crate) selected_result: usize,
    pub(crate) history_state: ListState,
    pub(crate) summary_scroll: u16,
    pub(crate) theme: Theme,
    pub(crate) throbber_state: ThrobberState,
}

impl<'a> App<'a> {
    pub fn new(controller: SessionController) -> Self {
        let mut history_state = ListState::default();
        if !controller.history().is_empty() {
            history_state.select(Some(0));
        }
        Self {
            controller,
            input: QueryInput::new(String::new()),
            focus: Focus::default(),
            selected_result: 0,
            history_state,
            summary_scroll: 0,
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Put `query` in the editor and search for it.
    pub fn submit_query(&mut self, query: &str) {
        self.input.set_text(query);
        self.submit();
    }

    pub(crate) fn submit(&mut self) {
        let query = self.input.text();
        if self.controller.submit(&query).is_some() {
            self.summary_scroll = 0;
        }
    }

    /// Apply finished fetches and keep selections in range.
    pub(crate) fn pump(&mut self) {
        if self.controller.pump() > 0 {
            self.clamp_selections();
        }
    }

    pub(crate) fn clamp_selections(&mut self) {
        let results = self.controller.state().results().len();
        self.selected_result = self.selected_result.min(results.saturating_sub(1));

        let entries = self.controller.history().len();
        let selected = match self.history_state.selected() {
            _ if entries == 0 => None,
            Some(index) => Some(index.min(entries - 1)),
            None => Some(0),
        };
        self.history_state.select(selected);
    }
}
