use std::collections::VecDeque;

use crate::board::{Board, Direction, Point};

/// The snake: an ordered run of occupied cells, head first, plus the
/// current heading and at most one queued turn. Turns queue instead of
/// applying immediately so a key press mid-tick never tears the state;
/// the queued turn takes effect at the start of the next advance.
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// Three colinear segments at the board center, heading right.
    pub fn new(board: &Board) -> Self {
        let center = board.center();
        let t = board.tile;
        let mut body = VecDeque::new();
        body.push_back(center);
        body.push_back(Point { x: center.x - t, y: center.y });
        body.push_back(Point { x: center.x - 2 * t, y: center.y });

        Snake {
            body,
            direction: Direction::Right,
            pending: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().unwrap()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Move one tile in the current heading: apply the queued turn if
    /// any, push the new head, drop the tail. No bounds or overlap
    /// checking here; the collision pass inspects the result.
    pub fn advance(&mut self, tile: i32) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let head = self.head();
        let (dx, dy) = self.direction.offset();
        self.body.push_front(Point {
            x: head.x + dx * tile,
            y: head.y + dy * tile,
        });
        self.body.pop_back();
    }

    /// Queue a turn for the next advance. Reversing straight into the
    /// current heading is ignored; a later request before the next tick
    /// overwrites an earlier one.
    pub fn request_turn(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = Some(direction);
        }
    }

    /// Duplicate the tail cell, lengthening the body by one in the same
    /// tick as the eat event.
    pub fn grow(&mut self) {
        let tail = *self.body.back().unwrap();
        self.body.push_back(tail);
    }
}
