use crate::Cell;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};

use rand::Rng;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(occupied: &[Cell]) -> Self {
        let mut food = Food { position: (0, 0) };
        food.reposition(occupied);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a uniformly random free cell. Rejection sampling:
    /// the snake covers a small fraction of the board in practice, so this
    /// settles in a couple of draws, and it never lands on the snake.
    pub fn reposition(&mut self, occupied: &[Cell]) {
        let mut rng = rand::thread_rng();

        loop {
            let cell = (rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));
            if !occupied.contains(&cell) {
                self.position = cell;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_lands_on_an_occupied_cell() {
        let occupied: Vec<Cell> = (0..GRID_WIDTH).map(|x| (x, 12)).collect();
        let mut food = Food::new(&occupied);

        for _ in 0..200 {
            food.reposition(&occupied);
            assert!(!occupied.contains(&food.position()));
        }
    }

    #[test]
    fn finds_the_single_free_cell() {
        // Every cell occupied except one corner; sampling must still land
        // there, proving the full range of both axes is eligible
        let free = (GRID_WIDTH - 1, GRID_HEIGHT - 1);
        let occupied: Vec<Cell> = (0..GRID_WIDTH)
            .flat_map(|x| (0..GRID_HEIGHT).map(move |y| (x, y)))
            .filter(|&cell| cell != free)
            .collect();

        let food = Food::new(&occupied);
        assert_eq!(food.position(), free);
    }

    #[test]
    fn stays_inside_the_board() {
        let mut food = Food::new(&[]);
        for _ in 0..200 {
            food.reposition(&[]);
            let (x, y) = food.position();
            assert!(x >= 0 && x < GRID_WIDTH);
            assert!(y >= 0 && y < GRID_HEIGHT);
        }
    }
}
