use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub toolbar: Rect,
    pub name_input: Rect,
    pub name_message: Rect,
    pub grid: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Name message
            Constraint::Min(4),    // Grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        toolbar: chunks[0],
        name_input: chunks[1],
        name_message: chunks[2],
        grid: chunks[3],
        status_bar: chunks[4],
    }
}
