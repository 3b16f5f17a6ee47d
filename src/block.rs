use crossterm::style::Color;
use rand::Rng;

pub const GRID_WIDTH: i16 = 30;
pub const GRID_HEIGHT: i16 = 30;

const FOOD_COLOR: Color = Color::Red;

/// One grid coordinate. Signed, since the head may step one cell past
/// an edge before the wall check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }
}

/// Playfield bounds, in cells.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Uniform over the whole grid. Occupancy is not consulted, so the
    /// sampled cell may lie on the snake's body.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

/// Position plus color. Snake segments and the food are both plain
/// blocks; there is no subtype relationship between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub cell: Cell,
    pub color: Color,
}

impl Block {
    pub fn new(cell: Cell, color: Color) -> Self {
        Block { cell, color }
    }
}

/// The food: a red block at a uniformly random cell.
#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub block: Block,
}

impl Food {
    pub fn new<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        Food { block: Block::new(grid.random_cell(rng), FOOD_COLOR) }
    }

    pub fn relocate<R: Rng>(&mut self, grid: &Grid, rng: &mut R) {
        self.block.cell = grid.random_cell(rng);
    }

    pub fn cell(&self) -> Cell {
        self.block.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn contains_matches_half_open_bounds() {
        let grid = Grid::new(30, 30);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(29, 29)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
        assert!(!grid.contains(Cell::new(30, 0)));
        assert!(!grid.contains(Cell::new(0, 30)));
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let grid = Grid::new(30, 30);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn relocated_food_stays_in_bounds() {
        let grid = Grid::new(30, 30);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(&grid, &mut rng);
        for _ in 0..100 {
            food.relocate(&grid, &mut rng);
            assert!(grid.contains(food.cell()));
        }
    }
}
