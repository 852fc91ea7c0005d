use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn name_highlight() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }

    /// White text on dark cells, black on light ones; background darkens with the value.
    pub fn cell(value: f64, selected: bool) -> Style {
        let fg = if value > 50.0 { Color::White } else { Color::Black };
        let shade = (255.0 * (1.0 - (value / 100.0).clamp(0.0, 1.0))).round() as u8;
        let style = Style::default().fg(fg).bg(Color::Rgb(shade, shade, shade));
        if selected {
            style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            style
        }
    }
}
