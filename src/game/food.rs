use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// Select a cell for a new food pellet, uniformly at random over the cells of
/// the board not occupied by `snake`.
///
/// Sampling is by rejection, so the snake must not fill the entire board.
/// That is a precondition, not a handled case: the board holds 400 cells, far
/// more than the snake reaches in play before colliding.
pub(super) fn place<R: Rng>(rng: &mut R, snake: &Snake) -> Position {
    loop {
        let pos = Position::new(
            rng.random_range(0..consts::BOARD_SIZE.width),
            rng.random_range(0..consts::BOARD_SIZE.height),
        );
        if !snake.occupies(pos) {
            return pos;
        }
    }
}
