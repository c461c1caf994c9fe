//! Core Connect Four game logic: board representation, sides, the four-cell
//! windows, the game state the search works on, and its static evaluation.

mod board;
mod score;
mod side;
mod state;
mod windows;

pub use board::{Board, Cell, COLS, ROWS};
pub use score::HeuristicWeights;
pub use side::Side;
pub use state::{GameOutcome, GameState};
pub use windows::{Window, WINDOWS, WINDOW_COUNT, WINDOW_LEN};
