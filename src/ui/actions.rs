use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};

impl<'a> App<'a> {
    /// Handle one key press. Returns `true` when the user asked to quit.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('e') if ctrl => {
                let _ = self.controller.export();
            }
            KeyCode::F(2) => {
                self.controller.cycle_country();
            }
            KeyCode::F(3) => {
                self.controller.cycle_ui_lang();
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Query => self.handle_query_key(key),
                Focus::Summary => self.handle_summary_key(key),
                Focus::Results => self.handle_results_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        false
    }

    fn handle_query_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit();
        } else {
            self.input.input(key);
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.controller.toggle_summary() {
                    self.summary_scroll = 0;
                }
            }
            KeyCode::Up => self.summary_scroll = self.summary_scroll.saturating_sub(1),
            KeyCode::Down => self.summary_scroll = self.summary_scroll.saturating_add(1),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let len = self.controller.state().results().len();
        match key.code {
            KeyCode::Up => self.selected_result = self.selected_result.saturating_sub(1),
            KeyCode::Down if self.selected_result + 1 < len => self.selected_result += 1,
            KeyCode::Enter => {
                self.controller.toggle_snippet(self.selected_result);
            }
            KeyCode::Char(' ') => {
                self.controller.toggle_snippet_detail(self.selected_result);
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let len = self.controller.history().len();
        let selected = self.history_state.selected();
        match key.code {
            KeyCode::Up => {
                if let Some(index) = selected
                    && index > 0
                {
                    self.history_state.select(Some(index - 1));
                }
            }
            KeyCode::Down => {
                if let Some(index) = selected
                    && index + 1 < len
                {
                    self.history_state.select(Some(index + 1));
                }
            }
            KeyCode::Enter => {
                let Some(index) = selected else {
                    return;
                };
                let query = self.controller.history().get(index).map(|e| e.query.clone());
                if let Some(query) = query {
                    self.input.set_text(query);
                    self.controller.rerun(index);
                    self.summary_scroll = 0;
                    self.history_state.select(Some(0));
                }
            }
            _ => {}
        }
    }
}
