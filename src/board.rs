use rand::Rng;

/// Side length of one grid tile, in pixels. Every settled entity
/// position is a multiple of this.
pub const TILE_SIZE: i32 = 20;

pub const BOARD_WIDTH: i32 = 400;
pub const BOARD_HEIGHT: i32 = 400;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in grid steps, before scaling by the tile size.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The playing field: a fixed pixel rectangle subdivided into square
/// tiles. Positions outside `[0, width) x [0, height)` are the wall
/// collision signal, not an error.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub tile: i32,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tile: TILE_SIZE,
        }
    }
}

impl Board {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    pub fn cols(&self) -> i32 {
        self.width / self.tile
    }

    pub fn rows(&self) -> i32 {
        self.height / self.tile
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2 / self.tile * self.tile,
            y: self.height / 2 / self.tile * self.tile,
        }
    }

    /// A tile-aligned cell chosen uniformly over the whole board.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Point {
        Point {
            x: rng.gen_range(0..self.cols()) * self.tile,
            y: rng.gen_range(0..self.rows()) * self.tile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn contains_is_half_open() {
        let board = Board::default();
        assert!(board.contains(Point { x: 0, y: 0 }));
        assert!(board.contains(Point { x: 380, y: 380 }));
        assert!(!board.contains(Point { x: 400, y: 200 }));
        assert!(!board.contains(Point { x: 200, y: 400 }));
        assert!(!board.contains(Point { x: -20, y: 200 }));
    }

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let cell = board.random_cell(&mut rng);
            assert!(board.contains(cell));
            assert_eq!(cell.x % board.tile, 0);
            assert_eq!(cell.y % board.tile, 0);
        }
    }

    #[test]
    fn center_is_tile_aligned() {
        let board = Board::default();
        let c = board.center();
        assert_eq!(c, Point { x: 200, y: 200 });
        assert_eq!(c.x % board.tile, 0);
    }
}
