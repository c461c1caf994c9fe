use crate::error::SearchError;
use crate::game::{GameState, HeuristicWeights, COLS};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::move_value::MoveValue;

/// Value of a move that completes four in a row. Far above anything the
/// heuristic can return, so a sure win always beats a promising position.
pub const WIN_VALUE: i32 = 2000;

/// Widest alpha-beta window. Symmetric so that negating a bound never overflows.
pub const SCORE_BOUND: i32 = i32::MAX;

/// Configuration for the search engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub win_value: i32,
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            win_value: WIN_VALUE,
            max_depth: 10,
        }
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: MoveValue,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every node works on its own copy of the position; the caller's state is
/// never touched.
pub struct AlphaBeta {
    heuristic: Box<dyn Heuristic>,
    win_value: i32,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic::default()), WIN_VALUE)
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>, win_value: i32) -> Self {
        AlphaBeta {
            heuristic,
            win_value,
        }
    }

    pub fn from_config(search: &SearchConfig, weights: HeuristicWeights) -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic::new(weights)), search.win_value)
    }

    /// Best move for the side to move, searching `depth` plies past the
    /// candidate move with the widest window.
    pub fn best_move(&self, state: &GameState, depth: u32) -> Result<MoveValue, SearchError> {
        self.search(state, depth).map(|outcome| outcome.best)
    }

    /// Like [`best_move`](Self::best_move), also reporting how many nodes were visited.
    pub fn search(&self, state: &GameState, depth: u32) -> Result<SearchOutcome, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }

        let mut nodes = 0;
        let best = self
            .pick(state, depth, -SCORE_BOUND, SCORE_BOUND, &mut nodes)
            .ok_or(SearchError::BoardFull)?;

        tracing::debug!(
            depth,
            nodes,
            column = best.column,
            value = best.value,
            "search finished"
        );
        Ok(SearchOutcome { best, nodes })
    }

    /// One node of the search, seen from the side to move in `state`.
    ///
    /// `low` is a value the mover can already reach by another move; `high` is
    /// what the opponent can already hold the mover to elsewhere. Returns
    /// `None` only when the board is full.
    pub fn choose_move(
        &self,
        state: &GameState,
        depth: u32,
        low: i32,
        high: i32,
    ) -> Option<MoveValue> {
        let mut nodes = 0;
        self.pick(state, depth, low, high, &mut nodes)
    }

    fn pick(
        &self,
        state: &GameState,
        depth: u32,
        mut low: i32,
        high: i32,
        nodes: &mut u64,
    ) -> Option<MoveValue> {
        *nodes += 1;
        if state.is_full() {
            return None;
        }

        let mover = state.current_player();
        let mut best: Option<MoveValue> = None;

        for column in 1..=COLS {
            if best.is_some_and(|b| b.value >= high) {
                break;
            }
            let Ok(next) = state.play(column) else {
                continue;
            };

            let value = if next.is_terminal() {
                self.win_value
            } else if depth > 0 {
                // A reply-less child filled the board without a win: a draw.
                self.pick(&next, depth - 1, -high, -low, nodes)
                    .map_or(0, |reply| -reply.value)
            } else {
                self.heuristic.evaluate(&next, mover)
            };

            let candidate = MoveValue::new(value, column);
            if candidate.improves_on(best.as_ref()) {
                best = Some(candidate);
                low = low.max(value);
            }
        }

        best
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}
