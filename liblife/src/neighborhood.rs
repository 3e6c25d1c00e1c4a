use serde::{Deserialize, Serialize};

use super::{
    board::{GameBoard, TileState},
    pos::Position,
};

/// Which surrounding cells count as neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neighborhood {
    /// North, south, west and east.
    VonNeumann,

    /// The orthogonal cells plus the four diagonals.
    #[default]
    Moore,
}

impl Neighborhood {
    /// Offsets as `[row, column]` pairs.
    pub fn relative_positions(self) -> &'static [[isize; 2]] {
        const VON_NEUMANN: &[[isize; 2]] = &[[-1, 0], [1, 0], [0, -1], [0, 1]];
        const MOORE: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        match self {
            Neighborhood::VonNeumann => VON_NEUMANN,
            Neighborhood::Moore => MOORE,
        }
    }

    /// The neighbors of `pos` that lie on the board.
    /// Positions off the board are skipped, never wrapped.
    pub fn neighbors<'a>(
        self,
        board: &'a GameBoard,
        pos: Position,
    ) -> impl Iterator<Item = &'a TileState> + 'a {
        self.relative_positions()
            .iter()
            .filter_map(move |rel_pos| board.tile(pos.offset(rel_pos[0], rel_pos[1])?))
    }

    pub fn live_neighbor_count(self, board: &GameBoard, pos: Position) -> usize {
        self.neighbors(board, pos)
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }
}
