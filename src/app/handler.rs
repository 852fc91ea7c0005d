use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::store::grid::GridAction;
use crate::store::name::NameAction;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, Instant::now()),
        AppEvent::Tick => {
            state.poll_debounced(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, now),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    match key.code {
        KeyCode::Char('c') if ctrl => return vec![Action::Quit],
        KeyCode::Char('r') if ctrl => return vec![Action::ForceRerender],
        KeyCode::Char('u') if ctrl => return vec![Action::Grid(GridAction::UpdateGrid)],
        KeyCode::F(5) => return vec![Action::ForceRerender],
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::NameInput => handle_name_key(state, key),
        FocusPanel::Grid => handle_grid_key(state, key, now),
    }
}

fn handle_name_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let text = state.name.state().clone();
    let field = &mut state.name_field;
    let edited = match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.delete_word_back(&text)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(field.insert_char(&text, c))
        }
        KeyCode::Backspace => field.delete_back(&text),
        KeyCode::Delete => field.delete_forward(&text),
        KeyCode::Left => {
            field.move_left(&text);
            None
        }
        KeyCode::Right => {
            field.move_right(&text);
            None
        }
        KeyCode::Home => {
            field.move_home();
            None
        }
        KeyCode::End => {
            field.move_end(&text);
            None
        }
        _ => None,
    };
    state.dirty = true;

    match edited {
        Some(edited) => vec![Action::Name(NameAction::Typed(edited))],
        None => vec![],
    }
}

fn handle_grid_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.move_selection(-1, 0),
        KeyCode::Down => state.move_selection(1, 0),
        KeyCode::Left => state.move_selection(0, -1),
        KeyCode::Right => state.move_selection(0, 1),
        KeyCode::Home => state.move_selection(0, isize::MIN),
        KeyCode::End => state.move_selection(0, isize::MAX),
        KeyCode::PageUp => state.move_selection(-10, 0),
        KeyCode::PageDown => state.move_selection(10, 0),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let (row, column) = state.selection;
            return vec![Action::Grid(GridAction::UpdateGridCell { row, column })];
        }
        KeyCode::Char('u') => return vec![Action::Grid(GridAction::UpdateGrid)],
        KeyCode::Char('+') | KeyCode::Char('=') => state.request_view_rows(1, now),
        KeyCode::Char('-') => state.request_view_rows(-1, now),
        KeyCode::Char('>') | KeyCode::Char('.') => state.request_view_columns(1, now),
        KeyCode::Char('<') | KeyCode::Char(',') => state.request_view_columns(-1, now),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let pos = Position::new(mouse.column, mouse.row);
    let hitboxes = state.hitboxes;

    if hitboxes.force_rerender.contains(pos) {
        return vec![Action::ForceRerender];
    }
    if hitboxes.update_grid.contains(pos) {
        return vec![Action::Grid(GridAction::UpdateGrid)];
    }
    if hitboxes.name_input.contains(pos) {
        state.focus = FocusPanel::NameInput;
        state.dirty = true;
        return vec![];
    }
    if let Some((row, column)) = hitboxes.grid.hit_test(mouse.column, mouse.row) {
        state.focus = FocusPanel::Grid;
        state.selection = (row, column);
        state.dirty = true;
        return vec![Action::Grid(GridAction::UpdateGridCell { row, column })];
    }
    vec![]
}
