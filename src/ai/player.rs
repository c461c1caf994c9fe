use crate::config::{PlayerConfig, PlayerKind};
use crate::error::GameError;
use crate::game::GameState;
use crate::ui::View;

use crate::game::HeuristicWeights;
use super::search::{AlphaBeta, SearchConfig};

/// Anyone who can be asked for a move.
pub trait Player {
    /// Choose a column for the side to move in `state`. The column returned
    /// is always a legal move.
    fn get_move(&mut self, state: &GameState, view: &mut dyn View) -> Result<usize, GameError>;

    /// Return the player's display name.
    fn name(&self) -> &str;

    /// Whether moves come from a person at the keyboard.
    fn is_human(&self) -> bool {
        false
    }
}

/// A person; moves come from the view.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        HumanPlayer { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, state: &GameState, view: &mut dyn View) -> Result<usize, GameError> {
        let column = view.get_user_move(state, &self.name)?;
        state.play(column)?;
        Ok(column)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// Picks moves with alpha-beta search at a fixed look-ahead.
pub struct ComputerPlayer {
    name: String,
    depth: u32,
    engine: AlphaBeta,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, depth: u32) -> Self {
        Self::with_engine(name, depth, AlphaBeta::new())
    }

    pub fn with_engine(name: impl Into<String>, depth: u32, engine: AlphaBeta) -> Self {
        ComputerPlayer {
            name: name.into(),
            depth,
            engine,
        }
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, state: &GameState, view: &mut dyn View) -> Result<usize, GameError> {
        let best = self.engine.best_move(state, self.depth)?;
        tracing::info!(
            player = %self.name,
            depth = self.depth,
            column = best.column,
            value = best.value,
            "computer move"
        );
        view.report_move(best.column, &self.name);
        Ok(best.column)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build the player a config entry describes.
pub fn build_player(
    config: &PlayerConfig,
    search: &SearchConfig,
    weights: HeuristicWeights,
) -> Box<dyn Player> {
    match config.kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(config.name.clone())),
        PlayerKind::Computer => Box::new(ComputerPlayer::with_engine(
            config.name.clone(),
            config.depth,
            AlphaBeta::from_config(search, weights),
        )),
    }
}
