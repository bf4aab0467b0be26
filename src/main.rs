mod food;
mod game;
mod grid;
mod input;
mod snake;
mod term;

pub type Cell = (i16, i16);

fn main() {
    let mut game = game::SnakeGame::new();
    // Runs until the user quits; quitting restores the terminal and
    // exits the process
    game.run();
}
