//! The turn loop: ask whoever is to move for a column, play it, repeat.

use crate::ai::Player;
use crate::error::GameError;
use crate::game::{GameOutcome, GameState, Side, COLS, ROWS};
use crate::ui::View;

/// One game between two players, owning the live state.
pub struct Session {
    state: GameState,
    players: [Box<dyn Player>; 2],
}

impl Session {
    pub fn new(players: [Box<dyn Player>; 2]) -> Self {
        Self::from_state(GameState::initial(), players)
    }

    /// Continue a game from an existing position.
    pub fn from_state(state: GameState, players: [Box<dyn Player>; 2]) -> Self {
        Session { state, players }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    pub fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }

    /// Ask the side to move for a column and play it.
    pub fn step(&mut self, view: &mut dyn View) -> Result<usize, GameError> {
        let side = self.state.current_player();
        let column = self.players[side.index()].get_move(&self.state, view)?;
        self.state.apply_move(column)?;
        tracing::debug!(side = ?side, column, "move applied");
        Ok(column)
    }

    /// Play until someone completes four in a row or the board fills up.
    pub fn run(&mut self, view: &mut dyn View) -> Result<GameOutcome, GameError> {
        view.display(&self.state, self.names())?;

        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            self.step(view)?;
            view.display(&self.state, self.names())?;
        };

        let moves = ROWS * COLS - self.state.board().empty_count();
        match outcome {
            GameOutcome::Winner(side) => {
                let name = self.player(side).name().to_string();
                tracing::info!(winner = %name, moves, "game over");
                view.report(&format!("{name}  wins!"));
            }
            GameOutcome::Draw => {
                tracing::info!(moves, "game over, draw");
                view.report("We have run out of space");
            }
        }
        Ok(outcome)
    }
}
