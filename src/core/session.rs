//! Session module - the game loop driver
//!
//! `GameState` owns every piece of game state and sequences one step of
//! gameplay at a time: gravity ticks, command application, locking, row
//! clearing, piece succession, and loss detection. The logical phases are
//! Falling, Locking, and GameOver; Locking runs synchronously inside the
//! tick that enters it, so between calls the session is either falling or
//! finished.

use crate::core::clear::{clear_rows, lock};
use crate::core::collide::piece_fits;
use crate::core::grid::{Grid, LockedCells};
use crate::core::piece::Piece;
use crate::core::rng::ShapeRng;
use crate::types::{Command, ShapeKind, GRAVITY_MS, ROW_SCORE};

/// Complete game state, exclusively owned by the driver loop.
#[derive(Debug, Clone)]
pub struct GameState {
    locked: LockedCells,
    /// Dense view of `locked`, regenerated after every lock.
    grid: Grid,
    current: Piece,
    next: ShapeKind,
    rng: ShapeRng,
    score: u32,
    game_over: bool,
    gravity_timer_ms: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = ShapeRng::new(seed);
        let first = rng.draw();
        let next = rng.draw();

        Self {
            locked: LockedCells::new(),
            grid: Grid::empty(),
            current: Piece::spawn(first),
            next,
            rng,
            score: 0,
            game_over: false,
            gravity_timer_ms: 0,
        }
    }

    /// Dense grid view of the settled cells, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece.
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The kind that will spawn after the current piece locks.
    pub fn next(&self) -> ShapeKind {
        self.next
    }

    /// Non-negative and monotonically non-decreasing.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Terminal flag; once set, commands and ticks are ignored.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub(crate) fn locked_mut(&mut self) -> &mut LockedCells {
        &mut self.locked
    }

    #[cfg(test)]
    pub(crate) fn refresh_grid(&mut self) {
        self.grid = Grid::from_locked(&self.locked);
    }

    /// Apply one player command.
    ///
    /// Invalid moves and rotations are expected and silently rejected - the
    /// tentative change is reverted and `false` comes back. After game over
    /// every command is a no-op.
    pub fn apply(&mut self, cmd: Command) -> bool {
        if self.game_over {
            return false;
        }

        match cmd {
            Command::MoveLeft => self.try_shift(-1, 0),
            Command::MoveRight => self.try_shift(1, 0),
            Command::SoftDrop => self.try_shift(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Advance game time by `elapsed_ms`.
    ///
    /// Gravity is a logical timer accumulated from elapsed real time; each
    /// time it fires the piece moves down one row, and a blocked downward
    /// move locks the piece in place.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }

        self.gravity_timer_ms += elapsed_ms;
        while self.gravity_timer_ms >= GRAVITY_MS {
            self.gravity_timer_ms -= GRAVITY_MS;
            if !self.try_shift(0, 1) {
                self.lock_current();
                if self.game_over {
                    return;
                }
            }
        }
    }

    /// Tentatively offset the piece origin; revert when the result is
    /// invalid.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        self.current.x += dx;
        self.current.y += dy;
        if piece_fits(&self.current, &self.grid) {
            return true;
        }
        self.current.x -= dx;
        self.current.y -= dy;
        false
    }

    /// Tentatively rotate; restore the saved mask when the result is
    /// invalid. No wall kicks are attempted.
    fn try_rotate(&mut self) -> bool {
        let saved = self.current.mask;
        self.current.rotate();
        if piece_fits(&self.current, &self.grid) {
            return true;
        }
        self.current.mask = saved;
        false
    }

    /// Commit the current piece: lock, clear rows, score, succeed the piece,
    /// and detect loss.
    fn lock_current(&mut self) {
        lock(&self.current, &mut self.locked);
        let cleared = clear_rows(&mut self.locked);
        self.score += cleared * ROW_SCORE;
        self.grid = Grid::from_locked(&self.locked);

        if self.locked.overflows_top() {
            self.game_over = true;
            return;
        }

        self.current = Piece::spawn(self.next);
        self.next = self.rng.draw();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
