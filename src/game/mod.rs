mod boost;
mod direction;
mod food;
mod snake;
use self::boost::Boost;
pub(crate) use self::boost::BoostMode;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::AppEvent;
use crate::command::Command;
use crate::config::Theme;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect, Size},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Position,
    boost: Boost,
    theme: Theme,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(theme: Theme, boost_mode: BoostMode) -> Self {
        Game::new_with_rng(theme, boost_mode, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(theme: Theme, boost_mode: BoostMode, mut rng: R) -> Game<R> {
        let snake = Snake::start();
        let food = food::place(&mut rng, &snake);
        Game {
            rng,
            snake,
            food,
            boost: Boost::new(boost_mode),
            theme,
            next_tick: None,
        }
    }

    /// Wait for input until the next tick is due.  Handles one input event if
    /// it arrives in time; otherwise advances the game by one tick.
    ///
    /// The tick deadline is re-armed from the current boost state after each
    /// tick, so a speed change takes effect on the next period while the
    /// period in flight completes on its original schedule.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppEvent>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + self.tick_period());
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            self.next_tick = None;
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the game by one tick: move the snake one cell in its current
    /// direction, growing it if it reaches the food.  A wall or self
    /// collision resets the run on the spot.
    fn advance(&mut self) {
        let Some(next) = self.snake.direction().advance(self.snake.head()) else {
            self.reset();
            return;
        };
        // Collision is checked against the snake as it stands before the
        // move; the cell the tail is about to vacate still counts.
        if self.snake.occupies(next) {
            self.reset();
            return;
        }
        if next == self.food {
            self.snake.advance_and_grow(next);
            self.food = food::place(&mut self.rng, &self.snake);
        } else {
            self.snake.advance_to(next);
        }
    }

    fn reset(&mut self) {
        self.snake = Snake::start();
        self.food = food::place(&mut self.rng, &self.snake);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<AppEvent> {
        if event == Event::FocusLost {
            // A boost key release can be lost while the terminal is
            // unfocused.
            self.boost.release();
            return None;
        }
        let Event::Key(ev) = event else {
            return None;
        };
        match Command::from_key_event(ev)? {
            Command::Quit => return Some(AppEvent::Quit),
            Command::Up => self.snake.turn(Direction::North),
            Command::Down => self.snake.turn(Direction::South),
            Command::Left => self.snake.turn(Direction::West),
            Command::Right => self.snake.turn(Direction::East),
            Command::BoostPress => self.boost.press(),
            Command::BoostRelease => self.boost.release(),
        }
        None
    }

    fn tick_period(&self) -> Duration {
        if self.boost.engaged() {
            consts::BOOST_TICK_PERIOD
        } else {
            consts::TICK_PERIOD
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let block_size = Size {
            width: consts::BOARD_SIZE.width.saturating_add(2),
            height: consts::BOARD_SIZE.height.saturating_add(2),
        };
        let block_area = center_rect(display, block_size);
        Block::bordered()
            .border_style(self.theme.border)
            .render(block_area, buf);
        let board_area = block_area.inner(Margin::new(1, 1));
        let mut board = Canvas {
            area: board_area,
            buf,
        };
        for &pos in self.snake.body() {
            board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, self.theme.snake);
        }
        board.draw_cell(self.food, consts::FOOD_SYMBOL, self.theme.food);
        // Draw the head last so it stays visible when it overlaps the food
        // on the frame before the grow tick
        board.draw_cell(
            self.snake.head(),
            self.snake.head_symbol(),
            self.theme.snake,
        );
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(
            Theme::default(),
            BoostMode::Hold,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    #[test]
    fn new_game_state() {
        let game = new_game();
        assert_eq!(game.snake, Snake::start());
        assert!(!game.snake.occupies(game.food));
        assert!(game.food.x < consts::BOARD_SIZE.width);
        assert!(game.food.y < consts::BOARD_SIZE.height);
    }

    #[test]
    fn tick_moves_snake_forward() {
        let mut game = new_game();
        game.food = Position::new(0, 0);
        game.advance();
        assert_eq!(game.snake.head(), Position::new(11, 10));
        assert_eq!(
            game.snake.body(),
            &VecDeque::from([Position::new(9, 10), Position::new(10, 10)])
        );
        assert_eq!(game.snake.body().len(), 2);
    }

    #[test]
    fn tick_grows_snake_on_food() {
        let mut game = new_game();
        game.food = Position::new(11, 10);
        game.advance();
        assert_eq!(game.snake.head(), Position::new(11, 10));
        assert_eq!(
            game.snake.body(),
            &VecDeque::from([
                Position::new(8, 10),
                Position::new(9, 10),
                Position::new(10, 10)
            ])
        );
        assert_eq!(game.snake.body().len(), 3);
        assert!(!game.snake.occupies(game.food));
        assert!(game.food.x < consts::BOARD_SIZE.width);
        assert!(game.food.y < consts::BOARD_SIZE.height);
    }

    #[test]
    fn length_constant_without_food() {
        let mut game = new_game();
        game.food = Position::new(0, 0);
        for _ in 0..9 {
            game.advance();
            assert_eq!(game.snake.body().len(), 2);
        }
        assert_eq!(game.snake.head(), Position::new(19, 10));
    }

    #[rstest]
    #[case(Position::new(19, 10), Direction::East)]
    #[case(Position::new(0, 10), Direction::West)]
    #[case(Position::new(5, 0), Direction::North)]
    #[case(Position::new(5, 19), Direction::South)]
    fn wall_collision_resets(#[case] head: Position, #[case] direction: Direction) {
        let mut game = new_game();
        game.food = Position::new(0, 0);
        game.snake.head = head;
        game.snake.direction = direction;
        game.advance();
        assert_eq!(game.snake, Snake::start());
        assert!(!game.snake.occupies(game.food));
    }

    #[test]
    fn self_collision_resets() {
        let mut game = new_game();
        // Doubled back; the next cell north of the head is in the body
        game.snake.head = Position::new(5, 5);
        game.snake.body = VecDeque::from([
            Position::new(5, 4),
            Position::new(6, 4),
            Position::new(6, 5),
        ]);
        game.snake.direction = Direction::North;
        game.advance();
        assert_eq!(game.snake, Snake::start());
        assert!(!game.snake.occupies(game.food));
    }

    #[test]
    fn tail_cell_counts_as_collision() {
        let mut game = new_game();
        game.snake.head = Position::new(5, 5);
        game.snake.body = VecDeque::from([
            Position::new(6, 5),
            Position::new(6, 4),
            Position::new(5, 4),
        ]);
        game.snake.direction = Direction::East; // next cell is the tail
        game.advance();
        assert_eq!(game.snake, Snake::start());
    }

    #[test]
    fn reversal_guard() {
        let mut game = new_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Left.into()))
            .is_none());
        assert_eq!(game.snake.direction(), Direction::East);
        assert!(game.handle_event(Event::Key(KeyCode::Up.into())).is_none());
        assert_eq!(game.snake.direction(), Direction::North);
    }

    #[test]
    fn boost_changes_tick_period() {
        let mut game = new_game();
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.tick_period(), consts::BOOST_TICK_PERIOD);
        let release =
            KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(game.handle_event(Event::Key(release)).is_none());
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
    }

    #[test]
    fn focus_lost_releases_boost() {
        let mut game = new_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.tick_period(), consts::BOOST_TICK_PERIOD);
        assert!(game.handle_event(Event::FocusLost).is_none());
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
    }

    #[test]
    fn quit_command() {
        let mut game = new_game();
        assert_eq!(
            game.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn render_running_game() {
        let mut game = new_game();
        game.food = Position::new(4, 2);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                                                                                ",
            "                             ┌────────────────────┐",
            "                             │                    │",
            "                             │                    │",
            "                             │    ●               │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │        ⚬⚬<         │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             │                    │",
            "                             └────────────────────┘",
            "",
        ]);
        expected.set_style(Rect::new(34, 4, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(38, 12, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
