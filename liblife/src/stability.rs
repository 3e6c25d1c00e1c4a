use super::board::GameBoard;

/// Number of ticks a cell is left alone before it gets flipped.
pub const DEFAULT_STABILITY_THRESHOLD: usize = 20;

/// Per-cell tick counters that force a cell to flip once it has been left alone for
/// `threshold` ticks. Keeps boards from settling into still lifes or perfect oscillators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityCounter {
    pub threshold: usize,
    ticks: Vec<usize>,
}

impl StabilityCounter {
    pub fn new(threshold: usize, board: &GameBoard) -> Self {
        Self {
            threshold,
            ticks: vec![0; board.tiles.len()],
        }
    }

    /// Ticks since the tile at the same index was last force-flipped.
    pub fn ticks(&self) -> &[usize] {
        &self.ticks
    }

    /// Flips every cell whose counter reached the threshold and resets that counter,
    /// every other counter advances by one. Returns the number of flipped cells.
    pub fn apply(&mut self, board: &mut GameBoard) -> usize {
        debug_assert_eq!(self.ticks.len(), board.tiles.len());

        let mut flipped = 0;

        for (ticks, tile) in self.ticks.iter_mut().zip(&mut board.tiles) {
            if *ticks >= self.threshold {
                *tile = tile.toggled();
                *ticks = 0;
                flipped += 1;
            } else {
                *ticks += 1;
            }
        }

        if flipped > 0 {
            tracing::trace!(flipped, "Force-flipped stable cells");
        }

        flipped
    }
}
