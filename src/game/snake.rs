use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are cells on the board, relative to its top-left corner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, tail first,
    /// head excluded
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake in its starting configuration: three cells long,
    /// horizontal, centered on the board, facing east.
    pub(super) fn start() -> Snake {
        let head = Position::new(consts::BOARD_SIZE.width / 2, consts::BOARD_SIZE.height / 2);
        let body = (1..consts::INITIAL_SNAKE_LENGTH)
            .rev()
            .map(|dx| Position::new(head.x - dx as u16, head.y))
            .collect();
        Snake {
            head,
            body,
            direction: Direction::East,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells in the snake's body, tail first
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Return the direction in which the snake is currently facing
    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Does any cell of the snake, head included, occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`.  A turn directly opposite
    /// to the current direction is ignored, as it would drive the head
    /// straight into the neck.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake's head to `pos`, dropping the tail cell so that the
    /// length stays constant
    pub(super) fn advance_to(&mut self, pos: Position) {
        self.body.push_back(self.head);
        self.head = pos;
        let _ = self.body.pop_front();
    }

    /// Move the snake's head to `pos` without dropping the tail, growing the
    /// snake by one cell in response to eating food
    pub(super) fn advance_and_grow(&mut self, pos: Position) {
        self.body.push_back(self.head);
        self.head = pos;
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn start_configuration() {
        let snake = Snake::start();
        assert_eq!(snake.head(), Position::new(10, 10));
        assert_eq!(
            snake.body(),
            &VecDeque::from([Position::new(8, 10), Position::new(9, 10)])
        );
        assert_eq!(snake.direction(), Direction::East);
        assert_eq!(snake.body().len() + 1, consts::INITIAL_SNAKE_LENGTH);
    }

    #[rstest]
    #[case(Direction::West, Direction::East)]
    #[case(Direction::North, Direction::North)]
    #[case(Direction::South, Direction::South)]
    #[case(Direction::East, Direction::East)]
    fn test_turn(#[case] turn: Direction, #[case] after: Direction) {
        let mut snake = Snake::start();
        snake.turn(turn);
        assert_eq!(snake.direction(), after);
    }

    #[test]
    fn turn_reversal_rejected_from_any_heading() {
        for (facing, reversal) in [
            (Direction::North, Direction::South),
            (Direction::South, Direction::North),
            (Direction::East, Direction::West),
            (Direction::West, Direction::East),
        ] {
            let mut snake = Snake::start();
            snake.direction = facing;
            snake.turn(reversal);
            assert_eq!(snake.direction(), facing);
        }
    }

    #[test]
    fn advance_keeps_length() {
        let mut snake = Snake::start();
        snake.advance_to(Position::new(11, 10));
        assert_eq!(snake.head(), Position::new(11, 10));
        assert_eq!(
            snake.body(),
            &VecDeque::from([Position::new(9, 10), Position::new(10, 10)])
        );
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn advance_and_grow_adds_one_cell() {
        let mut snake = Snake::start();
        snake.advance_and_grow(Position::new(11, 10));
        assert_eq!(snake.head(), Position::new(11, 10));
        assert_eq!(
            snake.body(),
            &VecDeque::from([
                Position::new(8, 10),
                Position::new(9, 10),
                Position::new(10, 10)
            ])
        );
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn occupies_head_body_and_tail() {
        let snake = Snake::start();
        assert!(snake.occupies(Position::new(10, 10)));
        assert!(snake.occupies(Position::new(9, 10)));
        assert!(snake.occupies(Position::new(8, 10)));
        assert!(!snake.occupies(Position::new(11, 10)));
    }
}
