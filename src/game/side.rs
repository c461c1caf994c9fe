use super::board::Cell;

/// One of the two players, by turn order. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Turn-order index: 0 for the first player, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }

    /// Convert side to the mark it leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}
