//! The grid component.
//!
//! Two levels of memoization: the frame and controls depend only on the view
//! dimensions and focus, and every cell depends only on its own value and
//! whether it is selected. Nothing here looks at the name store, so typing a
//! name re-runs none of these render functions.

use crate::app::state::{AppState, FocusPanel, GridGeometry};
use crate::store::grid::Grid;
use crate::ui::memo::{Memo, RenderStats};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Two digits plus a separating space.
pub const CELL_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridProps {
    pub rows: usize,
    pub columns: usize,
    pub requested_rows: usize,
    pub requested_columns: usize,
    pub focused: bool,
}

#[derive(Debug)]
pub struct GridChrome {
    focused: bool,
    controls: Line<'static>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellProps {
    pub value: f64,
    pub selected: bool,
}

pub type CellMemo = Memo<CellProps, Span<'static>>;

fn render_chrome(props: &GridProps) -> GridChrome {
    let dimension = |label: &str, value: usize, requested: usize| {
        if value == requested {
            format!("{} {}", label, value)
        } else {
            format!("{} {} (→{})", label, value, requested)
        }
    };
    let controls = Line::from(vec![
        Span::styled(
            dimension("Rows", props.rows, props.requested_rows),
            Theme::title(),
        ),
        Span::raw("  "),
        Span::styled(
            dimension("Columns", props.columns, props.requested_columns),
            Theme::title(),
        ),
        Span::styled(
            "   u update grid · ↵ update cell · +/- rows · </> columns",
            Theme::hint(),
        ),
    ]);
    GridChrome {
        focused: props.focused,
        controls,
    }
}

fn render_cell(props: &CellProps) -> Span<'static> {
    Span::styled(
        format!("{:>2} ", props.value.floor() as u32),
        Theme::cell(props.value, props.selected),
    )
}

/// Scroll offset along one axis that keeps `selected` inside a window of `visible`.
fn scroll_to(current: usize, selected: usize, visible: usize, total: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let mut first = current;
    if selected < first {
        first = selected;
    } else if selected >= first + visible {
        first = selected + 1 - visible;
    }
    first.min(total.saturating_sub(visible))
}

/// Per-cell memos sized to the grid; rebuilt if the dimensions change.
#[derive(Debug, Default)]
pub struct CellCache {
    cells: Vec<Vec<CellMemo>>,
}

impl CellCache {
    fn fit(&mut self, grid: &Grid) {
        let fits = self.cells.len() == grid.rows()
            && self.cells.first().map(Vec::len) == Some(grid.columns());
        if !fits {
            self.cells = (0..grid.rows())
                .map(|_| (0..grid.columns()).map(|_| CellMemo::new()).collect())
                .collect();
        }
    }
}

/// Mutable render-side state owned by the view cache.
pub struct GridCaches<'a> {
    pub chrome: &'a mut Memo<GridProps, GridChrome>,
    pub cells: &'a mut CellCache,
    pub scroll: &'a mut (usize, usize),
    pub stats: &'a mut RenderStats,
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, caches: GridCaches) -> GridGeometry {
    let grid = state.grid.state();
    let (rows, columns) = state.visible_dimensions();

    let props = GridProps {
        rows,
        columns,
        requested_rows: state.view_rows.requested(),
        requested_columns: state.view_columns.requested(),
        focused: state.focus == FocusPanel::Grid,
    };
    let chrome = caches.chrome.render(props, |p| {
        caches.stats.grid += 1;
        render_chrome(p)
    });

    let block = Block::default()
        .title(" Grid ")
        .title_style(if chrome.focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_style(if chrome.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return GridGeometry::default();
    }

    let controls_area = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(Paragraph::new(chrome.controls.clone()), controls_area);

    let cells_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    let visible_rows = rows.min(cells_area.height as usize);
    let visible_columns = columns.min((cells_area.width / CELL_WIDTH) as usize);

    let (sel_row, sel_column) = state.selection;
    *caches.scroll = (
        scroll_to(caches.scroll.0, sel_row, visible_rows, rows),
        scroll_to(caches.scroll.1, sel_column, visible_columns, columns),
    );
    let (first_row, first_column) = *caches.scroll;

    caches.cells.fit(grid);
    let stats = &mut *caches.stats;
    let mut lines: Vec<Line> = Vec::with_capacity(visible_rows);
    for r in first_row..first_row + visible_rows {
        let mut spans: Vec<Span> = Vec::with_capacity(visible_columns);
        for c in first_column..first_column + visible_columns {
            let Some(value) = grid.get(r, c) else { continue };
            let props = CellProps {
                value,
                selected: (r, c) == (sel_row, sel_column),
            };
            let span = caches.cells.cells[r][c].render(props, |p| {
                stats.cells += 1;
                render_cell(p)
            });
            spans.push(span.clone());
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), cells_area);

    GridGeometry {
        area: Rect::new(
            cells_area.x,
            cells_area.y,
            visible_columns as u16 * CELL_WIDTH,
            visible_rows as u16,
        ),
        first_row,
        first_column,
        visible_rows,
        visible_columns,
        cell_width: CELL_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_selection_visible() {
        assert_eq!(scroll_to(0, 5, 10, 100), 0);
        assert_eq!(scroll_to(0, 15, 10, 100), 6);
        assert_eq!(scroll_to(20, 15, 10, 100), 15);
        assert_eq!(scroll_to(95, 99, 10, 100), 90);
        assert_eq!(scroll_to(3, 0, 0, 100), 0);
    }

    #[test]
    fn test_cell_text_is_floored() {
        let span = render_cell(&CellProps {
            value: 7.99,
            selected: false,
        });
        assert_eq!(span.content, " 7 ");
        let span = render_cell(&CellProps {
            value: 99.5,
            selected: true,
        });
        assert_eq!(span.content, "99 ");
    }

    #[test]
    fn test_chrome_shows_pending_dimensions() {
        let chrome = render_chrome(&GridProps {
            rows: 50,
            columns: 50,
            requested_rows: 48,
            requested_columns: 50,
            focused: false,
        });
        let text = chrome.controls.to_string();
        assert!(text.starts_with("Rows 50 (→48)  Columns 50 "));
    }
}
