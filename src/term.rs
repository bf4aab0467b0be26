use crate::Cell;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
use std::{io::{stdout, Stdout, Write}, process::exit, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{poll, read, Event, KeyEvent};

pub const SNAKE_COLOR: Color = Color::Green;
pub const FOOD_COLOR: Color = Color::Red;
const BORDER_COLOR: Color = Color::Cyan;

// Two terminal columns per board cell so cells come out roughly square
const CELL_COLS: u16 = 2;
const BOARD_COLS: u16 = GRID_WIDTH as u16 * CELL_COLS + 2;
const BOARD_ROWS: u16 = GRID_HEIGHT as u16 + 2;

pub struct Display {
    stdout: Stdout,
}

impl Display {
    pub fn new() -> Self {
        Display { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        let (w, h) = terminal::size().expect("Error reading size.");
        if w < BOARD_COLS || h < BOARD_ROWS {
            eprintln!("Terminal too small: the board needs {}x{} characters.", BOARD_COLS, BOARD_ROWS);
            exit(1);
        }

        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        terminal::disable_raw_mode().expect("Error unsetting raw mode.");
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Drains pending events without blocking. Non-key events are
    /// dropped here.
    pub fn poll_events(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn draw_cell(&mut self, cell: Cell, color: Color) {
        let (col, row) = to_screen(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(color),
            style::Print("██"),
            style::ResetColor
        )
        .expect("Error drawing cell.");
    }

    pub fn erase_cell(&mut self, cell: Cell) {
        let (col, row) = to_screen(cell);
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print("  ")).expect("Error erasing cell.");
    }

    pub fn clear_board(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.draw_border();
    }

    pub fn present(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_border(&mut self) {
        queue!(self.stdout, style::SetForegroundColor(BORDER_COLOR)).expect("Error setting color.");

        for x in 0..BOARD_COLS {
            let ch = if x == 0 || x == BOARD_COLS - 1 { '+' } else { '-' };
            self.print_at(x, 0, ch);
            self.print_at(x, BOARD_ROWS - 1, ch);
        }

        for y in 1..BOARD_ROWS - 1 {
            self.print_at(0, y, '|');
            self.print_at(BOARD_COLS - 1, y, '|');
        }

        queue!(self.stdout, style::ResetColor).expect("Error resetting color.");
        self.present();
    }

    fn print_at(&mut self, col: u16, row: u16, ch: char) {
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print(ch)).expect("Error printing.");
    }
}

// Board cell -> terminal coordinates, offset past the border
fn to_screen(cell: Cell) -> (u16, u16) {
    (1 + cell.0 as u16 * CELL_COLS, 1 + cell.1 as u16)
}
