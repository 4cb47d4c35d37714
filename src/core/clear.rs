//! Lock & clear engine - commits a piece and resolves completed rows
//!
//! Clearing rebuilds the settled-cell index from a snapshot instead of
//! shifting cells while scanning: with adjacent full rows, incremental
//! mutation lets one row's collapse corrupt another's pending shift. The
//! snapshot makes the whole step atomic - drop the full rows, re-key every
//! survivor once.

use arrayvec::ArrayVec;

use crate::core::grid::{Grid, LockedCells};
use crate::core::piece::Piece;
use crate::types::GRID_HEIGHT;

/// Transfer every occupied cell of `piece` into the settled index.
///
/// Overwrites unconditionally. Placement was validated before locking, so an
/// overlap cannot happen in play; overwriting keeps the index well-formed
/// even if it does.
pub fn lock(piece: &Piece, locked: &mut LockedCells) {
    for (x, y) in piece.cells() {
        locked.insert(x, y, piece.kind);
    }
}

/// Remove every full row and collapse the rows above, returning how many
/// rows were cleared.
///
/// A surviving cell at row r re-keys to r plus the number of cleared rows
/// strictly below it (cleared index > r); cells on cleared rows are dropped.
/// After this returns, no row in the grid is full.
pub fn clear_rows(locked: &mut LockedCells) -> u32 {
    let grid = Grid::from_locked(locked);
    let full: ArrayVec<i8, { GRID_HEIGHT as usize }> = (0..GRID_HEIGHT)
        .filter(|&y| grid.is_row_full(y))
        .collect();

    if full.is_empty() {
        return 0;
    }

    let snapshot: Vec<_> = locked.iter().collect();
    locked.clear();
    for ((x, y), kind) in snapshot {
        if full.contains(&y) {
            continue;
        }
        let shift = full.iter().filter(|&&row| row > y).count() as i8;
        locked.insert(x, y + shift, kind);
    }

    full.len() as u32
}
