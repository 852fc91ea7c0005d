//! The grid store: a rows x columns matrix of random values in `[0, 100)`.

use super::{Reducer, Store};
use rand::RngExt;
use std::sync::Arc;
use thiserror::Error;

/// Exclusive upper bound of every cell value.
pub const MAX_CELL_VALUE: f64 = 100.0;

pub type GridStore = Store<GridReducer>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("grid dimensions must be non-zero (got {rows}x{columns})")]
    EmptyDimensions { rows: usize, columns: usize },
}

/// Immutable grid snapshot.
///
/// Rows are reference-counted so a single-cell update copies one row and
/// shares the rest with the previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: usize,
    rows: Vec<Arc<[f64]>>,
}

fn random_cell() -> f64 {
    let mut rng = rand::rng();
    rng.random_range(0.0..MAX_CELL_VALUE)
}

fn random_row(columns: usize) -> Arc<[f64]> {
    (0..columns).map(|_| random_cell()).collect()
}

impl Grid {
    pub fn random(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimensions { rows, columns });
        }
        Ok(Self {
            columns,
            rows: (0..rows).map(|_| random_row(columns)).collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Same dimensions, every cell re-rolled.
    pub fn regenerated(&self) -> Grid {
        Grid {
            columns: self.columns,
            rows: (0..self.rows()).map(|_| random_row(self.columns)).collect(),
        }
    }

    /// Copy of `self` with only `(row, column)` re-rolled.
    pub fn with_cell_regenerated(&self, row: usize, column: usize) -> Result<Grid, GridError> {
        if row >= self.rows() || column >= self.columns {
            return Err(GridError::CellOutOfBounds {
                row,
                column,
                rows: self.rows(),
                columns: self.columns,
            });
        }
        let mut rows = self.rows.clone();
        let mut touched = rows[row].to_vec();
        touched[column] = random_cell();
        rows[row] = Arc::from(touched);
        Ok(Grid {
            columns: self.columns,
            rows,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    UpdateGrid,
    UpdateGridCell { row: usize, column: usize },
}

#[derive(Debug)]
pub struct GridReducer;

impl Reducer for GridReducer {
    type State = Grid;
    type Action = GridAction;
    type Error = GridError;

    fn reduce(state: &Grid, action: GridAction) -> Result<Grid, GridError> {
        match action {
            GridAction::UpdateGrid => Ok(state.regenerated()),
            GridAction::UpdateGridCell { row, column } => state.with_cell_regenerated(row, column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// True when `row` is the same allocation in both snapshots.
    fn shares_row(a: &Grid, b: &Grid, row: usize) -> bool {
        Arc::ptr_eq(&a.rows[row], &b.rows[row])
    }

    fn all_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..grid.rows()).flat_map(move |r| {
            (0..grid.columns()).map(move |c| (r, c, grid.get(r, c).unwrap()))
        })
    }

    #[test]
    fn test_initial_grid_in_range() {
        let grid = Grid::random(100, 100).unwrap();
        assert_eq!(grid.rows(), 100);
        assert_eq!(grid.columns(), 100);
        for (_, _, v) in all_cells(&grid) {
            assert!(v.is_finite());
            assert!((0.0..MAX_CELL_VALUE).contains(&v));
        }
    }

    #[test]
    fn test_empty_dimensions_rejected() {
        assert_eq!(
            Grid::random(0, 5),
            Err(GridError::EmptyDimensions { rows: 0, columns: 5 })
        );
        assert!(Grid::random(5, 0).is_err());
    }

    #[test]
    fn test_update_one_cell_touches_only_that_cell() {
        let mut store = GridStore::new(Grid::random(100, 100).unwrap());
        let before = store.state().clone();
        store
            .dispatch(GridAction::UpdateGridCell { row: 3, column: 4 })
            .unwrap();
        let after = store.state();

        for (r, c, v) in all_cells(after) {
            let old = before.get(r, c).unwrap();
            if (r, c) == (3, 4) {
                assert_ne!(v.to_bits(), old.to_bits());
            } else {
                assert_eq!(v.to_bits(), old.to_bits(), "cell ({}, {}) changed", r, c);
            }
        }
        for r in 0..100 {
            assert_eq!(shares_row(after, &before, r), r != 3);
        }
    }

    #[test]
    fn test_update_grid_rerolls_every_cell() {
        let mut store = GridStore::new(Grid::random(20, 30).unwrap());
        let before = store.state().clone();
        store.dispatch(GridAction::UpdateGrid).unwrap();
        let after = store.state();

        assert_eq!(after.rows(), 20);
        assert_eq!(after.columns(), 30);
        let unchanged = all_cells(after)
            .filter(|&(r, c, v)| before.get(r, c) == Some(v))
            .count();
        assert_eq!(unchanged, 0);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_out_of_bounds_leaves_store_untouched() {
        let mut store = GridStore::new(Grid::random(4, 4).unwrap());
        let before = store.state().clone();
        let err = store
            .dispatch(GridAction::UpdateGridCell { row: 4, column: 0 })
            .unwrap_err();
        assert_eq!(
            err,
            GridError::CellOutOfBounds {
                row: 4,
                column: 0,
                rows: 4,
                columns: 4
            }
        );
        assert_eq!(store.state(), &before);
        assert_eq!(store.version(), 0);
    }
}
