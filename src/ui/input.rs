use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Search research topics…";

/// Single-line query editor.
///
/// Enter never reaches the text area; callers intercept it to submit.
pub struct QueryInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            textarea: build(initial.into()),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join(" ")
    }

    /// Replace the contents, leaving the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.textarea = build(text.into());
    }

    /// Feed a key press. Returns whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Draw inside `block`, showing the cursor only while focused.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, block: Block<'a>, focused: bool) {
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
        self.textarea.set_block(block);
        frame.render_widget(&self.textarea, area);
    }
}

fn build<'a>(text: String) -> TextArea<'a> {
    let single_line = text.replace(['\r', '\n'], " ");
    let mut textarea = TextArea::new(vec![single_line]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}
