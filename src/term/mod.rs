//! Terminal rendering module.
//!
//! Renders into a simple framebuffer of styled character cells which is then
//! flushed to the terminal with crossterm. `GameView` stays pure so the
//! mapping from engine state to cells is testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
