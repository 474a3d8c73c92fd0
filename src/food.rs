use rand::Rng;

use crate::board::{Board, Point};

/// A single food cell. Repositioning samples uniformly over the whole
/// board and does not check for overlap with the snake body; food that
/// lands under the snake is simply eaten as the body passes over it.
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn spawn<R: Rng>(board: &Board, rng: &mut R) -> Self {
        Food {
            position: board.random_cell(rng),
        }
    }

    /// Replace the position with a fresh uniform sample.
    pub fn relocate<R: Rng>(&mut self, board: &Board, rng: &mut R) {
        self.position = board.random_cell(rng);
    }
}
