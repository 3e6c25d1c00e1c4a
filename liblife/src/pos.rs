#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Applies a signed offset, returning `None` if either coordinate would go below zero.
    /// Upper bounds are left for the board to check.
    pub fn offset(self, row_offset: isize, column_offset: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_offset)?,
            column: self.column.checked_add_signed(column_offset)?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            column: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.column]
    }
}
