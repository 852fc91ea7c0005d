use crate::app::state::*;
use crate::ui::memo::RenderStats;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, stats: &RenderStats) {
    let mut parts: Vec<Span> = Vec::new();

    let status_style = if state.status_message.is_some() {
        Theme::error()
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    parts.push(Span::styled(
        format!(
            "| versions: grid {} name {} ",
            state.grid.version(),
            state.name.version()
        ),
        Theme::status_bar(),
    ));

    parts.push(Span::styled(
        format!(
            "| renders: app {} grid {} cells {} name {} ",
            stats.app, stats.grid, stats.cells, stats.name_input
        ),
        Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::NameInput => "NAME",
        FocusPanel::Grid => "GRID",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
