use super::windows::{self, WINDOWS, WINDOW_LEN};
use super::{Board, Cell, Side, COLS};
use crate::error::{BoardParseError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// The board together with the side whose turn it is.
///
/// Columns are numbered 1..=COLS here, as players see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    to_move: Side,
}

impl GameState {
    /// Create initial game state, first player to move
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            to_move: Side::X,
        }
    }

    /// Start from an existing grid
    pub fn from_board(board: Board, to_move: Side) -> Self {
        GameState { board, to_move }
    }

    /// Start from a row diagram, top row first (see [`Board::from_rows`]).
    pub fn from_rows(rows: &[&str], to_move: Side) -> Result<Self, BoardParseError> {
        Ok(Self::from_board(Board::from_rows(rows)?, to_move))
    }

    /// Get the side to move
    pub fn current_player(&self) -> Side {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True iff `column` is on the board and its topmost cell is empty.
    pub fn is_valid_move(&self, column: usize) -> bool {
        (1..=COLS).contains(&column) && !self.board.is_column_full(column - 1)
    }

    /// Legal columns in ascending order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=COLS).filter(|&c| self.is_valid_move(c))
    }

    /// Drop the mover's mark into `column` and pass the turn. Returns the row
    /// the piece landed in. Nothing changes if the move is rejected.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if !(1..=COLS).contains(&column) {
            return Err(MoveError::ColumnOutOfRange(column));
        }
        let row = self
            .board
            .drop_piece(column - 1, self.to_move.to_cell())
            .ok_or(MoveError::ColumnFull(column))?;
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Apply a move to a copy and return it
    pub fn play(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move(column)?;
        Ok(next)
    }

    /// True iff no column can take another piece
    pub fn is_full(&self) -> bool {
        !(1..=COLS).any(|c| self.is_valid_move(c))
    }

    /// True iff some window holds four identical marks
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// The side owning a completed window, if any
    pub fn winner(&self) -> Option<Side> {
        self.windows().find_map(|w| match w {
            [Cell::X, Cell::X, Cell::X, Cell::X] => Some(Side::X),
            [Cell::O, Cell::O, Cell::O, Cell::O] => Some(Side::O),
            _ => None,
        })
    }

    /// Win, draw, or `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(side) => Some(GameOutcome::Winner(side)),
            None if self.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Contents of every four-cell window, in the fixed order of [`WINDOWS`].
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW_LEN]> + '_ {
        WINDOWS.iter().map(|w| windows::cells(&self.board, w))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
