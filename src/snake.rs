use crossterm::style::Color;

use crate::block::{Block, Cell, Grid};

const SNAKE_COLOR: Color = Color::Green;

// Initial body, head first.
const START_CELLS: [(i16, i16); 3] = [(10, 15), (9, 15), (8, 15)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
}

/// What a single tick did to the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    Moved,
    Ate,
    Died(DeathCause),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    SelfCollision,
    WallCollision,
}

pub struct Snake {
    body: Vec<Block>,
    direction: Direction,
}

impl Snake {
    /// Three segments heading right, head first in the body list.
    pub fn new() -> Self {
        let body = START_CELLS
            .iter()
            .map(|&(x, y)| Block::new(Cell::new(x, y), SNAKE_COLOR))
            .collect();
        Snake { body, direction: Direction::Right }
    }

    #[cfg(test)]
    fn from_cells(cells: &[(i16, i16)], direction: Direction) -> Self {
        let body = cells
            .iter()
            .map(|&(x, y)| Block::new(Cell::new(x, y), SNAKE_COLOR))
            .collect();
        Snake { body, direction }
    }

    pub fn body(&self) -> &[Block] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0].cell
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction changes are validated here, at input time: a request
    /// for the exact opposite of the current heading is silently
    /// ignored.
    pub fn steer(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Advances the snake one cell: shift the body, move the head,
    /// then check self-collision, walls and food, in that order.
    pub fn advance(&mut self, grid: &Grid, food_cell: Cell) -> SnakeEvent {
        let old_tail = self.body[self.body.len() - 1].cell;

        // Each segment takes the prior position of the one ahead of it,
        // processed tail first, so contiguity survives without any
        // length change.
        for i in (1..self.body.len()).rev() {
            self.body[i].cell = self.body[i - 1].cell;
        }

        {
            let head = &mut self.body[0].cell;
            match self.direction {
                Direction::Up => head.y -= 1,
                Direction::Down => head.y += 1,
                Direction::Left => head.x -= 1,
                Direction::Right => head.x += 1,
            }
        }

        let head = self.body[0].cell;
        if self.body[1..].iter().any(|b| b.cell == head) {
            return SnakeEvent::Died(DeathCause::SelfCollision);
        }
        if !grid.contains(head) {
            return SnakeEvent::Died(DeathCause::WallCollision);
        }
        if head == food_cell {
            // Growth duplicates the cell the tail occupied before the
            // shift, so the new segment trails out on the next tick.
            self.body.push(Block::new(old_tail, SNAKE_COLOR));
            return SnakeEvent::Ate;
        }
        SnakeEvent::Moved
    }
}
