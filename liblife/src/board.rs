use itertools::Itertools;
use rand::Rng;

use super::pos::Position;

/// A fixed-size grid of cells stored row-major in a single vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub rows: usize,
    pub columns: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, columns: usize) -> Self {
        let tiles = vec![TileState::default(); rows * columns];
        Self::with_tiles(rows, columns, tiles)
    }

    /// Every cell is independently alive with a probability of one half.
    pub fn new_random<R>(rows: usize, columns: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut board = Self::new(rows, columns);
        board.randomize(rng);
        board
    }

    pub fn with_tiles(rows: usize, columns: usize, tiles: Vec<TileState>) -> Self {
        assert_eq!(
            tiles.len(),
            rows * columns,
            "Tile count doesn't match board dimensions"
        );

        Self {
            rows,
            columns,
            tiles,
        }
    }

    /// Builds a board from rows of 0/1 values, any non-zero value being alive.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let columns = rows.first().map_or(0, |row| row.len());

        let tiles = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), columns, "Rows must all be the same length");
                row.iter().map(|&value| TileState::from(value != 0))
            })
            .collect_vec();

        Self::with_tiles(rows.len(), columns, tiles)
    }

    pub fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for tile in &mut self.tiles {
            *tile = TileState::from(rng.random_bool(0.5));
        }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    /// Iterates the board one row slice at a time, top to bottom.
    pub fn tile_rows(&self) -> impl Iterator<Item = &[TileState]> {
        // chunks() panics on zero, an empty board simply has no rows.
        self.tiles.chunks(self.columns.max(1))
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, column } = pos.into();

        if row >= self.rows {
            return None;
        }

        if column >= self.columns {
            return None;
        }

        Some(column + (row * self.columns))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.columns;
        let column = index % self.columns;
        Position { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            TileState::Alive => TileState::Dead,
            TileState::Dead => TileState::Alive,
        }
    }

    /// The numeric cell value, 1 for alive and 0 for dead.
    pub fn value(self) -> u8 {
        match self {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
