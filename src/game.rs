use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::info;
use rand::rngs::ThreadRng;

use crate::snake::{Direction, SnakeEvent};
use crate::state::{GameState, Phase};
use crate::term::{ButtonRegion, TermManager};

// One simulation step per 75 ms, roughly the 13 steps per second the
// game has always run at.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

// How long a quiet loop iteration blocks on input.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";
const EXIT_LABEL: &str = "[ Exit ]";

pub struct SnakeGame {
    state: GameState,
    term: TermManager,
    rng: ThreadRng,
    // End-screen regions, play-again first.
    buttons: Vec<ButtonRegion>,
    quit: bool,
}

impl SnakeGame {
    pub fn new(high_score: u32) -> Self {
        let mut rng = rand::thread_rng();
        let state = GameState::new(high_score, &mut rng);
        SnakeGame {
            state,
            term: TermManager::new(),
            rng,
            buttons: vec![],
            quit: false,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn high_score_beaten(&self) -> bool {
        self.state.high_score_beaten
    }

    /// Enters the alternate screen and draws the waiting scene.
    pub fn init(&mut self) {
        self.term.setup();
        self.term.clear();
        self.draw_scene();
    }

    pub fn shutdown(&mut self) {
        self.term.restore();
    }

    /// The cooperative event loop: drain input, advance on the tick
    /// boundary, redraw. Returns when the player quits.
    pub fn run(&mut self) {
        let mut last_tick = Instant::now();

        while !self.quit {
            for event in self.term.poll_events(POLL_INTERVAL) {
                self.handle_event(event);
            }

            if self.state.phase == Phase::Running && last_tick.elapsed() >= TICK_INTERVAL {
                last_tick = Instant::now();
                match self.state.tick(&mut self.rng) {
                    Some(SnakeEvent::Died(_)) => self.draw_end_screen(),
                    Some(_) => self.draw_scene(),
                    None => {}
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_ctrl_c(&key) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter if self.state.phase == Phase::Ended => self.restart(),
            code => {
                if let Some(direction) = direction_for(code) {
                    self.handle_direction(direction);
                }
            }
        }
    }

    fn handle_direction(&mut self, direction: Direction) {
        match self.state.phase {
            Phase::NotStarted => {
                self.state.start(direction);
                info!("Game started");
            }
            Phase::Running => self.state.steer(direction),
            Phase::Ended => self.restart(),
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.state.phase != Phase::Ended {
            return;
        }

        if self.buttons.get(0).map_or(false, |b| b.contains(column, row)) {
            self.restart();
        } else if self.buttons.get(1).map_or(false, |b| b.contains(column, row)) {
            self.quit = true;
        }
    }

    fn restart(&mut self) {
        info!("Playing again");
        self.state.restart(&mut self.rng);
        self.buttons.clear();
        self.term.clear();
        self.draw_scene();
    }

    fn draw_scene(&mut self) {
        self.term.draw_score(self.state.score, self.state.high_score);
        self.term.draw_border();
        self.term.clear_playfield();
        self.term.draw_block(&self.state.food.block);
        for block in self.state.snake.body() {
            self.term.draw_block(block);
        }
        self.term.flush();
    }

    fn draw_end_screen(&mut self) {
        let lines = [
            "You died!".to_string(),
            format!("Your score was {}", self.state.score),
            String::new(),
        ];
        self.buttons = self.term.show_menu(&lines, &[PLAY_AGAIN_LABEL, EXIT_LABEL]);
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
