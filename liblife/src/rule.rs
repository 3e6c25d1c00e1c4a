use super::board::TileState;

/// Birth and survival neighbor counts. Only the classic B3/S23 rule is used, also for the
/// von Neumann neighborhood where it keeps the same literal thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_state(&self, tile: TileState, alive_neighbor_count: usize) -> TileState {
        let alive = match tile {
            TileState::Alive => self.survive.contains(&alive_neighbor_count),
            TileState::Dead => self.birth.contains(&alive_neighbor_count),
        };

        TileState::from(alive)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
