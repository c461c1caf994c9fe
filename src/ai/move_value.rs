/// A candidate column and the value search assigned to it, from the point of
/// view of the side that would play it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveValue {
    pub value: i32,
    pub column: usize,
}

impl MoveValue {
    pub fn new(value: i32, column: usize) -> Self {
        MoveValue { value, column }
    }

    /// Whether this candidate should replace `best`. Only a strictly greater
    /// value wins, so the first column found keeps a tie.
    pub fn improves_on(&self, best: Option<&MoveValue>) -> bool {
        best.map_or(true, |b| self.value > b.value)
    }
}
