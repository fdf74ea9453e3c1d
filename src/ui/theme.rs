use ratatui::style::{Color, Modifier, Style};

/// Colors used across the terminal UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub accent: Style,
    pub muted: Style,
    pub selected: Style,
    pub border: Style,
    pub focused_border: Style,
    pub link: Style,
    pub toggle: Style,
    pub error: Style,
}

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Rgb(74, 222, 128)),
    muted: Style::new().fg(Color::DarkGray),
    selected: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    border: Style::new().fg(Color::Rgb(71, 85, 105)),
    focused_border: Style::new().fg(Color::LightCyan),
    link: Style::new().fg(Color::Rgb(244, 63, 94)),
    toggle: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::LightRed),
};

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

impl Theme {
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.muted
    }
}
