use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue};

use crate::block::{Block, Cell, GRID_HEIGHT, GRID_WIDTH};

pub type ScreenPos = (u16, u16);

const TITLE: &str = "Serpent";

// Screen columns per grid cell: two columns make a cell roughly
// square in most terminal fonts.
const BLOCK_WIDTH: u16 = 2;

// Top-left interior cell of the playfield. Row 0 holds the score
// line, row 1 the top border.
const FIELD_ORIGIN: ScreenPos = (1, 2);

const BLOCK_GLYPH: &str = "██";

/// Smallest terminal that fits the bordered playfield and the score
/// line above it.
pub fn min_terminal_size() -> (u16, u16) {
    (
        FIELD_ORIGIN.0 + GRID_WIDTH as u16 * BLOCK_WIDTH + 1,
        FIELD_ORIGIN.1 + GRID_HEIGHT as u16 + 1,
    )
}

/// Screen region occupied by one clickable menu row.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRegion {
    x: u16,
    y: u16,
    width: u16,
}

impl ButtonRegion {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x + self.width
    }
}

pub struct TermManager {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        TermManager { stdout: stdout(), width, height }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(TITLE))
            .expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        terminal::disable_raw_mode().expect("Error unsetting raw mode.");
        execute!(self.stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)
            .expect("Error leaving alt screen");
    }

    /// Drains every pending input event, waiting at most `timeout`
    /// for the first one.
    pub fn poll_events(&self, timeout: Duration) -> Vec<Event> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait).expect("Error polling events.") {
            events.push(read().expect("Error reading event."));
            wait = Duration::from_millis(1);
        }

        events
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    pub fn draw_score(&mut self, score: u32, high_score: u32) {
        queue!(
            self.stdout,
            cursor::MoveTo(FIELD_ORIGIN.0, 0),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!("Score: {}    High Score: {}", score, high_score)),
        )
        .expect("Error drawing score.");
    }

    pub fn draw_border(&mut self) {
        let left = FIELD_ORIGIN.0 - 1;
        let top = FIELD_ORIGIN.1 - 1;
        let right = left + GRID_WIDTH as u16 * BLOCK_WIDTH + 1;
        let bottom = top + GRID_HEIGHT as u16 + 1;

        for x in left..=right {
            let ch = if x == left || x == right { '+' } else { '-' };
            self.put((x, top), ch);
            self.put((x, bottom), ch);
        }

        for y in top + 1..bottom {
            self.put((left, y), '|');
            self.put((right, y), '|');
        }
    }

    pub fn clear_playfield(&mut self) {
        let blank = " ".repeat(GRID_WIDTH as usize * BLOCK_WIDTH as usize);
        for y in 0..GRID_HEIGHT as u16 {
            queue!(
                self.stdout,
                cursor::MoveTo(FIELD_ORIGIN.0, FIELD_ORIGIN.1 + y),
                Print(&blank),
            )
            .expect("Error clearing playfield.");
        }
    }

    /// Draws one block as a colored square at `origin + cell * block
    /// width`. The cell must be within the grid.
    pub fn draw_block(&mut self, block: &Block) {
        let pos = cell_to_screen(block.cell);
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            SetForegroundColor(block.color),
            Print(BLOCK_GLYPH),
            ResetColor,
        )
        .expect("Error drawing block.");
    }

    /// Centered boxed message. Every `buttons` entry becomes its own
    /// row below `lines` and is returned as a clickable region, top
    /// to bottom.
    pub fn show_menu(&mut self, lines: &[String], buttons: &[&str]) -> Vec<ButtonRegion> {
        let inner = lines
            .iter()
            .map(|l| l.len())
            .chain(buttons.iter().map(|b| b.len()))
            .max()
            .unwrap_or(0) as u16
            + 4;
        let rows = (lines.len() + buttons.len()) as u16 + 2;
        let left = (self.width - inner - 2) / 2;
        let top = (self.height - rows) / 2;

        let mut regions = vec![];
        let mut y = top;

        self.put_row(left, y, &format!("+{}+", "-".repeat(inner as usize)));
        y += 1;
        for line in lines {
            self.put_row(left, y, &format!("|{: ^width$}|", line, width = inner as usize));
            y += 1;
        }
        for button in buttons {
            self.put_row(left, y, &format!("|{: ^width$}|", button, width = inner as usize));
            regions.push(ButtonRegion { x: left + 1, y, width: inner });
            y += 1;
        }
        self.put_row(left, y, &format!("+{}+", "-".repeat(inner as usize)));

        self.flush();
        regions
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, pos: ScreenPos, ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch)).expect("Error printing.");
    }

    fn put_row(&mut self, x: u16, y: u16, row: &str) {
        queue!(self.stdout, cursor::MoveTo(x, y), Print(row)).expect("Error printing row.");
    }
}

fn cell_to_screen(cell: Cell) -> ScreenPos {
    (
        FIELD_ORIGIN.0 + cell.x as u16 * BLOCK_WIDTH,
        FIELD_ORIGIN.1 + cell.y as u16,
    )
}
