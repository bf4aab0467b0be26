use crate::Cell;

// The board is a fixed-size torus: moving past an edge re-enters from the
// opposite one.
pub const GRID_WIDTH: i16 = 32;
pub const GRID_HEIGHT: i16 = 24;

pub const CENTER: Cell = (GRID_WIDTH / 2, GRID_HEIGHT / 2);

pub const TICKS_PER_SECOND: u64 = 20;

pub fn wrap(x: i16, y: i16) -> Cell {
    (x.rem_euclid(GRID_WIDTH), y.rem_euclid(GRID_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_coords_are_untouched() {
        assert_eq!(wrap(0, 0), (0, 0));
        assert_eq!(wrap(16, 12), (16, 12));
        assert_eq!(wrap(GRID_WIDTH - 1, GRID_HEIGHT - 1), (GRID_WIDTH - 1, GRID_HEIGHT - 1));
    }

    #[test]
    fn wraps_on_all_four_edges() {
        assert_eq!(wrap(GRID_WIDTH, 5), (0, 5));
        assert_eq!(wrap(-1, 5), (GRID_WIDTH - 1, 5));
        assert_eq!(wrap(5, GRID_HEIGHT), (5, 0));
        assert_eq!(wrap(5, -1), (5, GRID_HEIGHT - 1));
    }
}
