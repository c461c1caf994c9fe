//! Window counting behind the static evaluation.

use super::windows::WINDOW_COUNT;
use super::{GameState, Side};

/// Points for a window holding only one side's marks, by mark count.
///
/// Three of the opponent's marks weigh more than three of one's own, so a
/// position that leaves an open three for the opponent looks worse than the
/// same position with the roles swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub own_three: i32,
    pub opponent_three: i32,
    pub two: i32,
    pub one: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            own_three: 17,
            opponent_three: 20,
            two: 3,
            one: 1,
        }
    }
}

impl HeuristicWeights {
    fn tier(&self, count: usize, three: i32) -> i32 {
        match count {
            3 => three,
            2 => self.two,
            1 => self.one,
            _ => 0,
        }
    }

    pub fn largest(&self) -> i32 {
        self.own_three
            .max(self.opponent_three)
            .max(self.two)
            .max(self.one)
    }

    /// Largest magnitude a score under these weights can reach: every window
    /// at the heaviest tier.
    pub fn bound(&self) -> i32 {
        (WINDOW_COUNT as i32).saturating_mul(self.largest())
    }
}

impl GameState {
    /// Static evaluation from `side`'s point of view.
    ///
    /// Windows without opponent marks add to `side`'s total, windows without
    /// `side`'s marks add to the opponent's; mixed windows count for nobody.
    pub fn weighted_score(&self, side: Side, weights: &HeuristicWeights) -> i32 {
        let mine = side.to_cell();
        let theirs = side.other().to_cell();
        let mut own_total = 0;
        let mut opp_total = 0;

        for window in self.windows() {
            let own = window.iter().filter(|&&c| c == mine).count();
            let opp = window.iter().filter(|&&c| c == theirs).count();
            if opp == 0 {
                own_total += weights.tier(own, weights.own_three);
            }
            if own == 0 {
                opp_total += weights.tier(opp, weights.opponent_three);
            }
        }

        own_total - opp_total
    }

    /// Static evaluation with the default weights.
    pub fn heuristic_score(&self, side: Side) -> i32 {
        self.weighted_score(side, &HeuristicWeights::default())
    }
}
