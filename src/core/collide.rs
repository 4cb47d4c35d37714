//! Collision validator - pure placement predicate
//!
//! Checked before committing any move, rotation, or gravity step; callers
//! revert the tentative change when the predicate fails.

use crate::core::grid::Grid;
use crate::core::piece::Piece;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// True iff every occupied cell of `piece` is a legal placement on `grid`.
///
/// A cell is legal when its x lies in 0..GRID_WIDTH and its y is below
/// GRID_HEIGHT. Negative y is allowed - the piece is still entering play
/// from above - but any cell inside the visible grid must be vacant.
pub fn piece_fits(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().iter().all(|&(x, y)| {
        if x < 0 || x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return false;
        }
        y < 0 || grid.is_vacant(x, y)
    })
}
