use crate::game::{GameState, HeuristicWeights, Side};

/// Trait for evaluating a position from a side's point of view.
pub trait Heuristic {
    fn evaluate(&self, state: &GameState, side: Side) -> i32;

    /// Largest magnitude `evaluate` can return.
    fn bound(&self) -> i32;
}

/// Scores every four-cell window that only one side has marks in.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic {
    weights: HeuristicWeights,
}

impl WindowHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        WindowHeuristic { weights }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, state: &GameState, side: Side) -> i32 {
        state.weighted_score(side, &self.weights)
    }

    fn bound(&self) -> i32 {
        self.weights.bound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heuristic_matches_state_score() {
        let s = GameState::from_rows(
            &[
                ".......",
                ".......",
                ".......",
                "...O...",
                "..XX...",
                "..OXO..",
            ],
            Side::X,
        )
        .unwrap();
        let h = WindowHeuristic::default();
        for side in [Side::X, Side::O] {
            assert_eq!(h.evaluate(&s, side), s.heuristic_score(side));
        }
    }

    #[test]
    fn heuristic_custom_weights() {
        let h = WindowHeuristic::new(HeuristicWeights {
            own_three: 50,
            opponent_three: 80,
            two: 10,
            one: 0,
        });
        let s = GameState::from_rows(
            &[".......", ".......", ".......", ".......", ".......", "XXX...."],
            Side::O,
        )
        .unwrap();
        assert_eq!(h.evaluate(&s, Side::X), 50 + 10);
        assert_eq!(h.evaluate(&s, Side::O), -(80 + 10));
        assert_eq!(h.bound(), 69 * 80);
    }

    #[test]
    fn heuristic_bound_covers_default_weights() {
        let h = WindowHeuristic::default();
        assert_eq!(h.bound(), 69 * 20);
        assert!(h.bound() < 2000);
    }
}
