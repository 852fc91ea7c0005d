mod grid_view;
mod layout;
mod memo;
mod name_input;
mod status_bar;
mod theme;
mod toolbar;

use crate::app::state::{AppState, Hitboxes};
use grid_view::{CellCache, GridCaches, GridChrome, GridProps};
use memo::{Memo, RenderStats};
use name_input::{NameProps, NameView};
use ratatui::prelude::*;

/// Render-side state that outlives a single frame: memoized component
/// outputs, grid scroll position and the hitboxes of the last draw.
#[derive(Default)]
pub struct ViewCache {
    name_input: Memo<NameProps, NameView>,
    grid_chrome: Memo<GridProps, GridChrome>,
    cells: CellCache,
    grid_scroll: (usize, usize),
    stats: RenderStats,
    hitboxes: Hitboxes,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn hitboxes(&self) -> Hitboxes {
        self.hitboxes
    }
}

/// Draw the whole tree. The shell (toolbar, status bar) is recomputed every
/// time; the name input, grid and cells go through their memos.
pub fn render(frame: &mut Frame, state: &AppState, cache: &mut ViewCache) {
    cache.stats.app += 1;
    let app_layout = layout::compute_layout(frame.area());

    let buttons = toolbar::render(frame, app_layout.toolbar);

    let name_renders = cache.name_input.renders();
    name_input::render(
        frame,
        app_layout.name_input,
        app_layout.name_message,
        state,
        &mut cache.name_input,
    );
    cache.stats.name_input += cache.name_input.renders() - name_renders;

    let geometry = grid_view::render(
        frame,
        app_layout.grid,
        state,
        GridCaches {
            chrome: &mut cache.grid_chrome,
            cells: &mut cache.cells,
            scroll: &mut cache.grid_scroll,
            stats: &mut cache.stats,
        },
    );

    status_bar::render(frame, app_layout.status_bar, state, &cache.stats);

    cache.hitboxes = Hitboxes {
        force_rerender: buttons.force_rerender,
        update_grid: buttons.update_grid,
        name_input: app_layout.name_input,
        grid: geometry,
    };
}
