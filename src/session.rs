use rand::Rng;

use crate::board::{Board, Direction};
use crate::food::Food;
use crate::snake::Snake;

/// One running game: snake, food and score, advanced one tick at a
/// time. Owns no timer and touches no terminal or storage, so tests
/// drive it directly.
pub struct GameSession {
    pub board: Board,
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub game_over: bool,
}

/// What a single tick did, for the loop controller to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate: bool,
    pub game_over: bool,
}

impl GameSession {
    pub fn new<R: Rng>(board: Board, rng: &mut R) -> Self {
        GameSession {
            board,
            snake: Snake::new(&board),
            food: Food::spawn(&board, rng),
            score: 0,
            game_over: false,
        }
    }

    pub fn request_turn(&mut self, direction: Direction) {
        self.snake.request_turn(direction);
    }

    /// Advance the snake one cell, then run the collision and scoring
    /// checks in fixed order: wall, self, food. The food check runs
    /// unconditionally; an out-of-bounds head can never equal an
    /// in-bounds food cell, so the order is not observable.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.game_over {
            return TickOutcome {
                ate: false,
                game_over: true,
            };
        }

        self.snake.advance(self.board.tile);
        let head = self.snake.head();

        if !self.board.contains(head) {
            self.game_over = true;
        }

        if self.snake.segments().skip(1).any(|cell| cell == head) {
            self.game_over = true;
        }

        let mut ate = false;
        if head == self.food.position {
            self.food.relocate(&self.board, rng);
            self.snake.grow();
            self.score += 1;
            ate = true;
        }

        TickOutcome {
            ate,
            game_over: self.game_over,
        }
    }
}
