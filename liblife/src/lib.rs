use board::{GameBoard, TileState};
use config::GameConfig;
use neighborhood::Neighborhood;
use pos::Position;
use rand::{SeedableRng, rngs::StdRng};
use rule::Rule;
use stability::StabilityCounter;

pub mod board;
pub mod config;
pub mod neighborhood;
pub mod pos;
pub mod render;
pub mod rule;
pub mod stability;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub rule: Rule,
    pub neighborhood: Neighborhood,
    pub stability: Option<StabilityCounter>,
    generation: u64,
}

impl Game {
    pub fn new(
        board: GameBoard,
        neighborhood: Neighborhood,
        stability_threshold: Option<usize>,
    ) -> Self {
        let stability =
            stability_threshold.map(|threshold| StabilityCounter::new(threshold, &board));

        Self {
            board,
            rule: Rule::default(),
            neighborhood,
            stability,
            generation: 0,
        }
    }

    /// A randomly filled game, the board being drawn from an RNG seeded once with `seed`.
    pub fn new_seeded(config: &GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = GameBoard::new_random(config.rows, config.columns, &mut rng);

        Self::new(board, config.neighbor_mode, config.stability_threshold)
    }

    /// Ticks applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation. Every cell is evaluated against the untouched current board
    /// and the result replaces it as a whole, followed by the stability flips if enabled.
    pub fn tick(&mut self) {
        let next_tiles = self
            .board
            .enumerate_tiles()
            .map(|(tile_pos, tile)| self.tick_tile(tile_pos, *tile))
            .collect();

        self.board = GameBoard::with_tiles(self.board.rows, self.board.columns, next_tiles);

        if let Some(stability) = &mut self.stability {
            stability.apply(&mut self.board);
        }

        self.generation += 1;
    }

    pub fn live_neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        self.neighborhood.live_neighbor_count(&self.board, pos.into())
    }

    fn tick_tile(&self, tile_pos: Position, tile: TileState) -> TileState {
        let alive_neighbor_count = self.live_neighbor_count(tile_pos);
        let next = self.rule.next_state(tile, alive_neighbor_count);

        // A birth only ever happens to a dead cell and a death only to a live one.
        if next != tile {
            match next {
                TileState::Alive => debug_assert_eq!(tile, TileState::Dead),
                TileState::Dead => debug_assert_eq!(tile, TileState::Alive),
            }
        }

        next
    }
}
