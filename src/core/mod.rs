//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI, timing, or I/O.
//!
//! - [`grid`]: sparse settled-cell index plus the dense grid view
//! - [`piece`]: 4x4 shape masks and the falling piece
//! - [`collide`]: pure placement-validity predicate
//! - [`clear`]: locking and row clearing/collapse
//! - [`rng`]: seeded uniform shape selection
//! - [`session`]: the game loop driver tying everything together

pub mod clear;
pub mod collide;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;

pub use clear::{clear_rows, lock};
pub use collide::piece_fits;
pub use grid::{Grid, LockedCells};
pub use piece::{rotated_cw, Mask, Piece};
pub use rng::{ShapeRng, SimpleRng};
pub use session::GameState;
