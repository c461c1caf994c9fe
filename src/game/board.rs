use std::fmt;

use crate::error::BoardParseError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The 6x7 grid, stored flat. Row 0 is the bottom, column 0 the left edge.
///
/// Indices here are zero-based; the one-based column numbers players use are
/// translated by [`GameState`](super::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    /// Build a board from a diagram, top row first, using `.`, `X` and `O`.
    ///
    /// Every piece must rest on the bottom or on another piece.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount {
                expected: ROWS,
                got: rows.len(),
            });
        }

        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != COLS {
                return Err(BoardParseError::RowLength {
                    row,
                    expected: COLS,
                    got: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(BoardParseError::BadCell { row, ch })?;
                board.cells[Self::index(row, col)] = cell;
            }
        }

        for col in 0..COLS {
            let mut seen_empty = false;
            for row in 0..ROWS {
                match board.get(row, col) {
                    Cell::Empty => seen_empty = true,
                    _ if seen_empty => return Err(BoardParseError::Floating(col + 1)),
                    _ => {}
                }
            }
        }

        Ok(board)
    }

    /// Flat index of a cell
    pub const fn index(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Get the cell at a flat index
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Check if a column is full, i.e. its topmost cell is taken
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.get(ROWS - 1, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed, or `None`
    /// if the column cannot take it.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        let row = (0..ROWS).find(|&row| self.get(row, col) == Cell::Empty)?;
        self.cells[Self::index(row, col)] = cell;
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid top row first, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.empty_count(), ROWS * COLS);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::X).unwrap();
        assert_eq!(row, 0); // Bottom row
        assert_eq!(board.get(0, 3), Cell::X);

        let row = board.drop_piece(3, Cell::O).unwrap();
        assert_eq!(row, 1); // Stacks on top
        assert_eq!(board.get(1, 3), Cell::O);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::X).unwrap();
        }
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::O), None);
    }

    #[test]
    fn test_out_of_range_column_counts_as_full() {
        let mut board = Board::new();
        assert!(board.is_column_full(COLS));
        assert_eq!(board.drop_piece(COLS, Cell::X), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_from_rows_places_bottom_row_last() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
            "X..X...",
        ])
        .unwrap();
        assert_eq!(board.get(0, 0), Cell::X);
        assert_eq!(board.get(0, 3), Cell::X);
        assert_eq!(board.get(1, 3), Cell::O);
        assert_eq!(board.empty_count(), ROWS * COLS - 3);
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let err = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "..X....",
            ".......",
        ])
        .unwrap_err();
        assert_eq!(err, BoardParseError::Floating(3));
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert!(matches!(
            Board::from_rows(&["......."]),
            Err(BoardParseError::RowCount { .. })
        ));
        assert!(matches!(
            Board::from_rows(&["......", "", "", "", "", ""]),
            Err(BoardParseError::RowLength { .. })
        ));
        assert!(matches!(
            Board::from_rows(&[".......", ".......", ".......", ".......", ".......", "..Z...."]),
            Err(BoardParseError::BadCell { ch: 'Z', .. })
        ));
    }

    #[test]
    fn test_display_top_row_first() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::X).unwrap();
        board.drop_piece(0, Cell::O).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[ROWS - 1], "X......");
        assert_eq!(lines[ROWS - 2], "O......");
    }
}
