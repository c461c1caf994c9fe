//! Move selection: the window heuristic, alpha-beta search, and the players
//! that use them.

mod heuristic;
mod move_value;
mod player;
mod search;

pub use crate::game::HeuristicWeights;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use move_value::MoveValue;
pub use player::{build_player, ComputerPlayer, HumanPlayer, Player};
pub use search::{AlphaBeta, SearchConfig, SearchOutcome, SCORE_BOUND, WIN_VALUE};
