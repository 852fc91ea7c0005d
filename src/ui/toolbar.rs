use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const FORCE_RERENDER_LABEL: &str = " force rerender ";
pub const UPDATE_GRID_LABEL: &str = " update grid ";

/// Screen areas of the two toolbar buttons.
pub struct ToolbarButtons {
    pub force_rerender: Rect,
    pub update_grid: Rect,
}

/// Part of the app shell: redrawn on every frame, never memoized.
pub fn render(frame: &mut Frame, area: Rect) -> ToolbarButtons {
    let force_width = FORCE_RERENDER_LABEL.len() as u16;
    let update_width = UPDATE_GRID_LABEL.len() as u16;
    let gap = 1u16;

    let line = Line::from(vec![
        Span::styled(FORCE_RERENDER_LABEL, Theme::button()),
        Span::raw(" ".repeat(gap as usize)),
        Span::styled(UPDATE_GRID_LABEL, Theme::button()),
        Span::styled("  F5 rerender · Tab focus · Esc quit", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let force_rerender = Rect::new(area.x, area.y, force_width, 1).intersection(area);
    let update_grid =
        Rect::new(area.x + force_width + gap, area.y, update_width, 1).intersection(area);
    ToolbarButtons {
        force_rerender,
        update_grid,
    }
}
