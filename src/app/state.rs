use crate::app::action::Action;
use crate::config::AppConfig;
use crate::store::grid::{Grid, GridError, GridStore};
use crate::store::name::NameStore;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    NameInput,
    Grid,
}

/// A value whose requested changes only take effect after a quiet period.
#[derive(Debug)]
pub struct Debounced<T> {
    committed: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Copy + PartialEq> Debounced<T> {
    pub fn new(value: T, delay: Duration) -> Self {
        Self {
            committed: value,
            pending: None,
            delay,
        }
    }

    /// The value components render with.
    pub fn value(&self) -> T {
        self.committed
    }

    /// The most recently requested value, committed or not.
    pub fn requested(&self) -> T {
        self.pending.map(|(v, _)| v).unwrap_or(self.committed)
    }

    /// Request a new value; restarts the quiet period.
    pub fn request(&mut self, value: T, now: Instant) {
        if value == self.committed {
            self.pending = None;
        } else {
            self.pending = Some((value, now + self.delay));
        }
    }

    /// Commit the pending value if its quiet period is over. Returns true on commit.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((value, due)) if now >= due => {
                self.committed = value;
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

/// Cursor over the name text. The text itself lives in the name store; every
/// edit returns the new string to dispatch.
#[derive(Debug, Default)]
pub struct NameField {
    pub cursor: usize,
}

impl NameField {
    fn prev_boundary(text: &str, cursor: usize) -> usize {
        text[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(text: &str, cursor: usize) -> usize {
        text[cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor + i)
            .unwrap_or(text.len())
    }

    /// Keep the cursor on a char boundary inside `text`.
    pub fn clamp(&mut self, text: &str) {
        self.cursor = self.cursor.min(text.len());
        while !text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn insert_char(&mut self, text: &str, c: char) -> String {
        self.clamp(text);
        let mut edited = text.to_string();
        edited.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        edited
    }

    pub fn delete_back(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.cursor == 0 {
            return None;
        }
        let prev = Self::prev_boundary(text, self.cursor);
        let mut edited = text.to_string();
        edited.drain(prev..self.cursor);
        self.cursor = prev;
        Some(edited)
    }

    pub fn delete_forward(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.cursor >= text.len() {
            return None;
        }
        let next = Self::next_boundary(text, self.cursor);
        let mut edited = text.to_string();
        edited.drain(self.cursor..next);
        Some(edited)
    }

    pub fn delete_word_back(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.cursor == 0 {
            return None;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        let mut edited = text.to_string();
        edited.drain(pos..self.cursor);
        self.cursor = pos;
        Some(edited)
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        if self.cursor > 0 {
            self.cursor = Self::prev_boundary(text, self.cursor);
        }
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        if self.cursor < text.len() {
            self.cursor = Self::next_boundary(text, self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.cursor = text.len();
    }
}

/// Where the visible cells were drawn last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridGeometry {
    pub area: Rect,
    pub first_row: usize,
    pub first_column: usize,
    pub visible_rows: usize,
    pub visible_columns: usize,
    pub cell_width: u16,
}

impl GridGeometry {
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if self.cell_width == 0 || !self.area.contains(Position::new(x, y)) {
            return None;
        }
        let dx = ((x - self.area.x) / self.cell_width) as usize;
        let dy = (y - self.area.y) as usize;
        if dx >= self.visible_columns || dy >= self.visible_rows {
            return None;
        }
        Some((self.first_row + dy, self.first_column + dx))
    }
}

/// Clickable regions recorded by the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub force_rerender: Rect,
    pub update_grid: Rect,
    pub name_input: Rect,
    pub grid: GridGeometry,
}

pub struct AppState {
    pub config: AppConfig,
    pub grid: GridStore,
    pub name: NameStore,
    pub name_field: NameField,
    pub focus: FocusPanel,
    /// Selected cell as (row, column).
    pub selection: (usize, usize),
    pub view_rows: Debounced<usize>,
    pub view_columns: Debounced<usize>,
    /// Bumped by "force rerender"; only the app shell reads it.
    pub render_epoch: u64,
    pub hitboxes: Hitboxes,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, GridError> {
        let grid = Grid::random(config.grid.rows, config.grid.columns)?;
        let delay = Duration::from_millis(config.view.debounce_ms);
        let view_rows = config.view.rows.clamp(1, grid.rows());
        let view_columns = config.view.columns.clamp(1, grid.columns());
        Ok(Self {
            grid: GridStore::new(grid),
            name: NameStore::new(String::new()),
            name_field: NameField::default(),
            focus: FocusPanel::NameInput,
            selection: (0, 0),
            view_rows: Debounced::new(view_rows, delay),
            view_columns: Debounced::new(view_columns, delay),
            render_epoch: 0,
            hitboxes: Hitboxes::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
            config,
        })
    }

    /// Rows and columns currently shown, bounded by the grid itself.
    pub fn visible_dimensions(&self) -> (usize, usize) {
        let grid = self.grid.state();
        (
            self.view_rows.value().min(grid.rows()),
            self.view_columns.value().min(grid.columns()),
        )
    }

    pub fn clamp_selection(&mut self) {
        let (rows, columns) = self.visible_dimensions();
        self.selection.0 = self.selection.0.min(rows.saturating_sub(1));
        self.selection.1 = self.selection.1.min(columns.saturating_sub(1));
    }

    pub fn move_selection(&mut self, d_row: isize, d_column: isize) {
        let (rows, columns) = self.visible_dimensions();
        let step = |pos: usize, delta: isize, len: usize| -> usize {
            pos.saturating_add_signed(delta).min(len.saturating_sub(1))
        };
        self.selection = (
            step(self.selection.0, d_row, rows),
            step(self.selection.1, d_column, columns),
        );
        self.dirty = true;
    }

    pub fn request_view_rows(&mut self, delta: isize, now: Instant) {
        let max = self.grid.state().rows();
        let value = self.view_rows.requested().saturating_add_signed(delta).clamp(1, max);
        self.view_rows.request(value, now);
        self.dirty = true;
    }

    pub fn request_view_columns(&mut self, delta: isize, now: Instant) {
        let max = self.grid.state().columns();
        let value = self
            .view_columns
            .requested()
            .saturating_add_signed(delta)
            .clamp(1, max);
        self.view_columns.request(value, now);
        self.dirty = true;
    }

    /// Commit rows/columns whose quiet period is over.
    pub fn poll_debounced(&mut self, now: Instant) {
        let rows = self.view_rows.poll(now);
        let columns = self.view_columns.poll(now);
        if rows || columns {
            tracing::debug!(
                rows = self.view_rows.value(),
                columns = self.view_columns.value(),
                "view dimensions committed"
            );
            self.clamp_selection();
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::NameInput => FocusPanel::Grid,
            FocusPanel::Grid => FocusPanel::NameInput,
        };
        self.dirty = true;
    }

    /// Route an action to the one store it belongs to.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Grid(grid_action) => match self.grid.dispatch(grid_action) {
                Ok(()) => self.status_message = None,
                Err(e) => {
                    tracing::warn!(error = %e, "grid update rejected");
                    self.status_message = Some(e.to_string());
                }
            },
            Action::Name(name_action) => {
                if let Err(never) = self.name.dispatch(name_action) {
                    match never {}
                }
                self.name_field.clamp(self.name.state());
            }
            Action::ForceRerender => {
                self.render_epoch = self.render_epoch.wrapping_add(1);
                tracing::info!(epoch = self.render_epoch, "forced rerender");
            }
            Action::Quit => self.should_quit = true,
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let (rows, columns) = self.visible_dimensions();
        format!(
            "Cell ({}, {}) | {}x{} shown",
            self.selection.0, self.selection.1, rows, columns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::grid::GridAction;
    use crate::store::name::NameAction;

    fn small_state() -> AppState {
        let mut config = AppConfig::default();
        config.grid.rows = 8;
        config.grid.columns = 6;
        config.view.rows = 5;
        config.view.columns = 5;
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_debounce_commits_after_delay() {
        let start = Instant::now();
        let mut value = Debounced::new(50usize, Duration::from_millis(300));
        value.request(40, start);
        assert_eq!(value.value(), 50);
        assert_eq!(value.requested(), 40);
        assert!(!value.poll(start + Duration::from_millis(100)));

        // A second request restarts the quiet period.
        value.request(30, start + Duration::from_millis(200));
        assert!(!value.poll(start + Duration::from_millis(400)));
        assert!(value.poll(start + Duration::from_millis(500)));
        assert_eq!(value.value(), 30);
        assert!(!value.poll(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_debounce_request_back_to_committed_cancels() {
        let start = Instant::now();
        let mut value = Debounced::new(5usize, Duration::from_millis(10));
        value.request(6, start);
        value.request(5, start);
        assert!(!value.poll(start + Duration::from_secs(1)));
        assert_eq!(value.value(), 5);
    }

    #[test]
    fn test_name_field_editing() {
        let mut field = NameField::default();
        let text = field.insert_char("", 'T');
        let text = field.insert_char(&text, 'o');
        assert_eq!(text, "To");
        field.move_home();
        let text = field.insert_char(&text, 'é');
        assert_eq!(text, "éTo");
        assert_eq!(field.cursor, 'é'.len_utf8());
        let text = field.delete_back(&text).unwrap();
        assert_eq!(text, "To");
        assert_eq!(field.delete_back(&text), None);
        let text = field.delete_forward(&text).unwrap();
        assert_eq!(text, "o");
        field.move_end(&text);
        assert_eq!(field.delete_forward(&text), None);
    }

    #[test]
    fn test_name_field_delete_word() {
        let mut field = NameField::default();
        field.move_end("hello dog  ");
        let text = field.delete_word_back("hello dog  ").unwrap();
        assert_eq!(text, "hello ");
        assert_eq!(field.cursor, 6);
    }

    #[test]
    fn test_grid_geometry_hit_test() {
        let geometry = GridGeometry {
            area: Rect::new(2, 3, 12, 4),
            first_row: 10,
            first_column: 20,
            visible_rows: 4,
            visible_columns: 3,
            cell_width: 4,
        };
        assert_eq!(geometry.hit_test(2, 3), Some((10, 20)));
        assert_eq!(geometry.hit_test(7, 4), Some((11, 21)));
        assert_eq!(geometry.hit_test(13, 6), Some((13, 22)));
        assert_eq!(geometry.hit_test(1, 3), None);
        assert_eq!(geometry.hit_test(2, 7), None);
    }

    #[test]
    fn test_name_edit_leaves_grid_alone() {
        let mut state = small_state();
        let grid_before = state.grid.state().clone();
        state.apply(Action::Name(NameAction::Typed("Toto".into())));
        assert_eq!(state.name.state(), "Toto");
        assert_eq!(state.grid.state(), &grid_before);
        assert_eq!(state.grid.version(), 0);
    }

    #[test]
    fn test_grid_edit_leaves_name_alone() {
        let mut state = small_state();
        state.apply(Action::Name(NameAction::Typed("Toto".into())));
        state.apply(Action::Grid(GridAction::UpdateGrid));
        state.apply(Action::Grid(GridAction::UpdateGridCell { row: 1, column: 1 }));
        assert_eq!(state.name.state(), "Toto");
        assert_eq!(state.name.version(), 1);
        assert_eq!(state.grid.version(), 2);
    }

    #[test]
    fn test_force_rerender_keeps_state() {
        let mut state = small_state();
        state.apply(Action::Name(NameAction::Typed("Toto".into())));
        let grid_before = state.grid.state().clone();
        state.dirty = false;
        state.apply(Action::ForceRerender);
        assert!(state.dirty);
        assert_eq!(state.render_epoch, 1);
        assert_eq!(state.grid.state(), &grid_before);
        assert_eq!(state.name.state(), "Toto");
    }

    #[test]
    fn test_rejected_cell_update_sets_status() {
        let mut state = small_state();
        state.apply(Action::Grid(GridAction::UpdateGridCell { row: 99, column: 0 }));
        assert_eq!(state.grid.version(), 0);
        assert!(state.status_line().contains("outside"));
    }

    #[test]
    fn test_view_requests_clamp_and_commit() {
        let mut state = small_state();
        let now = Instant::now();
        state.selection = (4, 4);
        state.request_view_rows(-3, now);
        state.request_view_columns(100, now);
        assert_eq!(state.view_rows.requested(), 2);
        assert_eq!(state.view_columns.requested(), 6);
        assert_eq!(state.visible_dimensions(), (5, 5));

        state.poll_debounced(now + Duration::from_secs(1));
        assert_eq!(state.visible_dimensions(), (2, 6));
        assert_eq!(state.selection, (1, 4));
    }

    #[test]
    fn test_move_selection_stays_in_view() {
        let mut state = small_state();
        state.move_selection(-1, -1);
        assert_eq!(state.selection, (0, 0));
        state.move_selection(10, 10);
        assert_eq!(state.selection, (4, 4));
    }
}
