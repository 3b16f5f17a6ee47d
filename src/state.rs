use log::info;
use rand::Rng;

use crate::block::{Food, Grid, GRID_HEIGHT, GRID_WIDTH};
use crate::snake::{Direction, Snake, SnakeEvent};

/// Coarse game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

/// The whole mutable state of one session, owned exclusively by the
/// event loop and advanced through the methods below.
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid: Grid,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub high_score_beaten: bool,
}

impl GameState {
    pub fn new<R: Rng>(high_score: u32, rng: &mut R) -> Self {
        let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
        GameState {
            snake: Snake::new(),
            food: Food::new(&grid, rng),
            grid,
            phase: Phase::NotStarted,
            score: 0,
            high_score,
            high_score_beaten: false,
        }
    }

    /// A direction key starts a game that has not begun yet, already
    /// steering towards the pressed direction.
    pub fn start(&mut self, direction: Direction) {
        if self.phase == Phase::NotStarted {
            self.snake.steer(direction);
            self.phase = Phase::Running;
        }
    }

    pub fn steer(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.snake.steer(direction);
        }
    }

    /// Advances one tick. Returns `None` outside the running phase.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<SnakeEvent> {
        if self.phase != Phase::Running {
            return None;
        }

        let event = self.snake.advance(&self.grid, self.food.cell());
        match event {
            SnakeEvent::Ate => {
                self.score += 1;
                let head = self.snake.head();
                info!("Ate food at ({}, {}), score {}", head.x, head.y, self.score);
                self.food.relocate(&self.grid, rng);
                if self.score > self.high_score {
                    self.high_score = self.score;
                    if !self.high_score_beaten {
                        info!("High score beaten");
                        self.high_score_beaten = true;
                    }
                }
            }
            SnakeEvent::Died(cause) => {
                info!("Snake died ({:?}) with score {}", cause, self.score);
                self.phase = Phase::Ended;
            }
            SnakeEvent::Moved => {}
        }
        Some(event)
    }

    /// Fresh snake and food, score back to zero. The high score and
    /// the beaten flag survive for the rest of the session.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        if self.phase == Phase::Ended {
            self.snake = Snake::new();
            self.food = Food::new(&self.grid, rng);
            self.score = 0;
            self.phase = Phase::Running;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Cell;
    use crate::snake::DeathCause;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn place_food_ahead(state: &mut GameState) {
        let head = state.snake.head();
        state.food.block.cell = Cell::new(head.x + 1, head.y);
    }

    #[test]
    fn direction_key_starts_the_game() {
        let mut rng = rng();
        let mut state = GameState::new(7, &mut rng);
        assert_eq!(state.phase, Phase::NotStarted);
        state.start(Direction::Up);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.snake.direction(), Direction::Up);
    }

    #[test]
    fn tick_outside_running_is_a_no_op() {
        let mut rng = rng();
        let mut state = GameState::new(0, &mut rng);
        let head = state.snake.head();
        assert_eq!(state.tick(&mut rng), None);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.phase, Phase::NotStarted);
    }

    #[test]
    fn eating_scores_and_relocates_food() {
        let mut rng = rng();
        let mut state = GameState::new(7, &mut rng);
        state.start(Direction::Right);
        place_food_ahead(&mut state);
        assert_eq!(state.tick(&mut rng), Some(SnakeEvent::Ate));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.body().len(), 4);
        assert!(state.grid.contains(state.food.cell()));
        // One eat does not touch a high score of 7.
        assert_eq!(state.high_score, 7);
        assert!(!state.high_score_beaten);
    }

    #[test]
    fn high_score_updates_only_when_exceeded() {
        let mut rng = rng();
        let mut state = GameState::new(2, &mut rng);
        state.start(Direction::Right);

        for _ in 0..2 {
            place_food_ahead(&mut state);
            assert_eq!(state.tick(&mut rng), Some(SnakeEvent::Ate));
        }
        // Matching the high score is not beating it.
        assert_eq!(state.score, 2);
        assert_eq!(state.high_score, 2);
        assert!(!state.high_score_beaten);

        place_food_ahead(&mut state);
        assert_eq!(state.tick(&mut rng), Some(SnakeEvent::Ate));
        assert_eq!(state.high_score, 3);
        assert!(state.high_score_beaten);

        place_food_ahead(&mut state);
        assert_eq!(state.tick(&mut rng), Some(SnakeEvent::Ate));
        assert_eq!(state.high_score, 4);
        assert!(state.high_score_beaten);
    }

    #[test]
    fn death_ends_the_game_and_restart_resets() {
        let mut rng = rng();
        let mut state = GameState::new(0, &mut rng);
        state.start(Direction::Up);

        // Drive the head into the top wall.
        loop {
            match state.tick(&mut rng) {
                Some(SnakeEvent::Died(cause)) => {
                    assert_eq!(cause, DeathCause::WallCollision);
                    break;
                }
                Some(_) => {}
                None => panic!("tick stopped before the wall"),
            }
        }
        assert_eq!(state.phase, Phase::Ended);

        state.restart(&mut rng);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.body().len(), 3);
        assert_eq!(state.snake.head(), Cell::new(10, 15));
    }

    #[test]
    fn restart_outside_ended_is_a_no_op() {
        let mut rng = rng();
        let mut state = GameState::new(0, &mut rng);
        state.restart(&mut rng);
        assert_eq!(state.phase, Phase::NotStarted);
        state.start(Direction::Right);
        state.restart(&mut rng);
        assert_eq!(state.phase, Phase::Running);
    }
}
