use crate::Cell;
use crate::grid::{self, CENTER};
use Direction::*;

use rand::seq::SliceRandom;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub struct Snake {
    body: Vec<Cell>, // head first
    length: usize,   // target cell count, body catches up within one tick
    direction: Direction,
    next_direction: Option<Direction>,
}

impl Snake {
    pub fn new(direction: Direction) -> Self {
        Snake { body: vec![CENTER], length: 1, direction, next_direction: None }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn queue_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Commits a queued direction change. Must run before `move_step`
    /// each tick.
    pub fn update_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    /// Advances the head one cell, wrapping at the board edges. Returns
    /// the vacated tail cell unless the snake just grew, so the caller
    /// can erase it.
    pub fn move_step(&mut self) -> Option<Cell> {
        let (dx, dy) = self.direction.delta();
        let (hx, hy) = self.head();
        self.body.insert(0, grid::wrap(hx + dx, hy + dy));

        if self.body.len() > self.length {
            self.body.pop()
        } else {
            None
        }
    }

    /// True if the head sits on any other body cell. Checked after
    /// `move_step`; the caller resets the snake on collision.
    pub fn self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single segment at the board center, heading in the given
    /// direction, or a random one if none is given.
    pub fn reset(&mut self, direction: Option<Direction>) {
        self.body.clear();
        self.body.push(CENTER);
        self.length = 1;
        self.next_direction = None;
        self.direction = direction.unwrap_or_else(|| {
            *ALL_DIRECTIONS.choose(&mut rand::thread_rng()).unwrap()
        });
    }
}
