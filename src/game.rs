use std::{process::exit, thread::sleep, time::{Duration, Instant}};

use crate::food::Food;
use crate::grid::TICKS_PER_SECOND;
use crate::input;
use crate::snake::{Direction, Snake};
use crate::term::{Display, FOOD_COLOR, SNAKE_COLOR};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const TICK: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

pub struct SnakeGame {
    display: Display,
    snake: Snake,
    food: Food,
    next_tick: Instant,
}

impl SnakeGame {
    pub fn new() -> Self {
        let snake = Snake::new(Direction::Right);
        let food = Food::new(snake.body());

        SnakeGame { display: Display::new(), snake, food, next_tick: Instant::now() }
    }

    pub fn run(&mut self) -> ! {
        self.display.setup();
        self.display.clear_board();
        self.redraw_entities();
        self.next_tick = Instant::now() + TICK;

        loop {
            self.wait_for_next_tick();
            self.handle_input();

            self.snake.update_direction();
            let old_tail = self.snake.move_step();

            if self.snake.self_collision() {
                // Start over at the center with a random heading
                self.snake.reset(None);
                self.food.reposition(self.snake.body());
                self.display.clear_board();
                self.redraw_entities();
                continue;
            }

            if self.snake.head() == self.food.position() {
                self.snake.grow();
                self.food.reposition(self.snake.body());
            }

            if let Some(tail) = old_tail {
                self.display.erase_cell(tail);
            }
            self.redraw_entities();
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn handle_input(&mut self) {
        for key_ev in self.display.poll_events() {
            match &key_ev {
                ev if is_quit(ev) => self.clean_exit(),
                KeyEvent { code, modifiers: _ } => {
                    if let Some(dir) = input::map_key(*code, self.snake.direction()) {
                        self.snake.queue_direction(dir);
                    }
                }
            }
        }
    }

    // Blocks until the next tick boundary. The deadline is absolute so a
    // slow frame doesn't slide every later tick.
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            sleep(self.next_tick - now);
        }
        self.next_tick += TICK;
    }

    fn redraw_entities(&mut self) {
        for &cell in self.snake.body() {
            self.display.draw_cell(cell, SNAKE_COLOR);
        }
        self.display.draw_cell(self.food.position(), FOOD_COLOR);
        self.display.present();
    }

    fn clean_exit(&mut self) -> ! {
        self.display.restore();
        exit(0);
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Esc, .. }
            | KeyEvent { code: KeyCode::Char('q'), .. }
            | KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
    )
}
