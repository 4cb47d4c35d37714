//! Grid module - settled geometry storage
//!
//! Locked cells live in a sparse index keyed by grid coordinates; the dense
//! `Grid` view is regenerated from it and serves collision checks and
//! rendering. The index is the single source of truth: every mutation goes
//! through it, and a fresh dense view is built afterwards so the two never
//! diverge.
//!
//! Coordinates: (x, y) with x in 0..GRID_WIDTH (left to right) and y in
//! 0..GRID_HEIGHT (top to bottom). The index may transiently hold cells with
//! y < 0 when a piece locks while still entering play; that state is the
//! loss condition.

use std::collections::HashMap;

use crate::types::{Cell, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells in the dense view
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Sparse index of settled cells: (x, y) -> the kind that placed the cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockedCells {
    cells: HashMap<(i8, i8), ShapeKind>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle a cell, overwriting any previous occupant.
    pub fn insert(&mut self, x: i8, y: i8, kind: ShapeKind) {
        self.cells.insert((x, y), kind);
    }

    pub fn get(&self, x: i8, y: i8) -> Option<ShapeKind> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate all settled cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((i8, i8), ShapeKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// Remove every settled cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// True iff any settled cell sits above the visible grid.
    ///
    /// This is the loss predicate: a piece locked with cells at y < 0 means
    /// the stack has overflowed the spawn side.
    pub fn overflows_top(&self) -> bool {
        self.cells.keys().any(|&(_, y)| y < 0)
    }
}

/// Dense GRID_WIDTH x GRID_HEIGHT view of the settled cells, flat row-major
/// storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Build the dense view from the sparse index.
    ///
    /// Cells above the visible grid (y < 0) have no dense slot and are
    /// skipped; they only matter to the loss check on the index itself.
    pub fn from_locked(locked: &LockedCells) -> Self {
        let mut grid = Self::empty();
        for ((x, y), kind) in locked.iter() {
            if let Some(idx) = Self::index(x, y) {
                grid.cells[idx] = Some(kind);
            }
        }
        grid
    }

    /// Flat index for (x, y), or None when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Cell at (x, y); None when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// In bounds and vacant.
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and settled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// A row is full iff it contains no empty cell.
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= GRID_HEIGHT {
            return false;
        }
        let start = (y as usize) * (GRID_WIDTH as usize);
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Count of settled cells in the visible grid.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_is_vacant_everywhere() {
        let grid = Grid::empty();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                assert!(grid.is_vacant(x, y), "cell ({}, {})", x, y);
            }
        }
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = Grid::empty();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(GRID_WIDTH, 0), None);
        assert_eq!(grid.get(0, GRID_HEIGHT), None);
    }

    #[test]
    fn dense_view_reflects_index() {
        let mut locked = LockedCells::new();
        locked.insert(0, 0, ShapeKind::I);
        locked.insert(5, 10, ShapeKind::T);

        let grid = Grid::from_locked(&locked);
        assert_eq!(grid.get(0, 0), Some(Some(ShapeKind::I)));
        assert_eq!(grid.get(5, 10), Some(Some(ShapeKind::T)));
        assert!(grid.is_occupied(5, 10));
        assert!(grid.is_vacant(5, 11));
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn cells_above_grid_are_skipped_by_dense_view() {
        let mut locked = LockedCells::new();
        locked.insert(3, -1, ShapeKind::O);
        locked.insert(3, 0, ShapeKind::O);

        let grid = Grid::from_locked(&locked);
        assert_eq!(grid.occupied_count(), 1);
        assert!(locked.overflows_top());
    }

    #[test]
    fn overflow_requires_negative_row() {
        let mut locked = LockedCells::new();
        assert!(!locked.overflows_top());
        locked.insert(0, 0, ShapeKind::J);
        assert!(!locked.overflows_top());
        locked.insert(0, -1, ShapeKind::J);
        assert!(locked.overflows_top());
    }

    #[test]
    fn row_full_detection() {
        let mut locked = LockedCells::new();
        for x in 0..GRID_WIDTH - 1 {
            locked.insert(x, GRID_HEIGHT - 1, ShapeKind::L);
        }
        let grid = Grid::from_locked(&locked);
        assert!(!grid.is_row_full(GRID_HEIGHT - 1));

        locked.insert(GRID_WIDTH - 1, GRID_HEIGHT - 1, ShapeKind::L);
        let grid = Grid::from_locked(&locked);
        assert!(grid.is_row_full(GRID_HEIGHT - 1));
        assert!(!grid.is_row_full(0));
        assert!(!grid.is_row_full(-1));
        assert!(!grid.is_row_full(GRID_HEIGHT));
    }
}
