use crate::snake::Direction::{self, *};

use crossterm::event::KeyCode;

/// Maps a key press to the direction the snake should turn to, given where
/// it is currently heading. The table only admits perpendicular turns:
/// reversals would make the snake fold into itself on the spot, and repeats
/// of the current direction are no-ops. Anything else maps to `None`.
pub fn map_key(key: KeyCode, current: Direction) -> Option<Direction> {
    match (key, current) {
        (KeyCode::Up, Left) | (KeyCode::Up, Right) => Some(Up),
        (KeyCode::Down, Left) | (KeyCode::Down, Right) => Some(Down),
        (KeyCode::Left, Up) | (KeyCode::Left, Down) => Some(Left),
        (KeyCode::Right, Up) | (KeyCode::Right, Down) => Some(Right),
        (KeyCode::Char('w'), Left) | (KeyCode::Char('w'), Right) => Some(Up),
        (KeyCode::Char('s'), Left) | (KeyCode::Char('s'), Right) => Some(Down),
        (KeyCode::Char('a'), Up) | (KeyCode::Char('a'), Down) => Some(Left),
        (KeyCode::Char('d'), Up) | (KeyCode::Char('d'), Down) => Some(Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_turns_are_accepted() {
        assert_eq!(map_key(KeyCode::Up, Right), Some(Up));
        assert_eq!(map_key(KeyCode::Down, Right), Some(Down));
        assert_eq!(map_key(KeyCode::Left, Up), Some(Left));
        assert_eq!(map_key(KeyCode::Right, Down), Some(Right));
    }

    #[test]
    fn exact_reversals_are_ignored() {
        assert_eq!(map_key(KeyCode::Left, Right), None);
        assert_eq!(map_key(KeyCode::Right, Left), None);
        assert_eq!(map_key(KeyCode::Up, Down), None);
        assert_eq!(map_key(KeyCode::Down, Up), None);
    }

    #[test]
    fn same_direction_repeats_are_ignored() {
        assert_eq!(map_key(KeyCode::Right, Right), None);
        assert_eq!(map_key(KeyCode::Up, Up), None);
    }

    #[test]
    fn wasd_mirrors_the_arrow_keys() {
        assert_eq!(map_key(KeyCode::Char('w'), Right), Some(Up));
        assert_eq!(map_key(KeyCode::Char('a'), Down), Some(Left));
        assert_eq!(map_key(KeyCode::Char('s'), Left), Some(Down));
        assert_eq!(map_key(KeyCode::Char('d'), Up), Some(Right));
        assert_eq!(map_key(KeyCode::Char('a'), Right), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x'), Right), None);
        assert_eq!(map_key(KeyCode::Enter, Up), None);
        assert_eq!(map_key(KeyCode::Esc, Down), None);
    }
}
