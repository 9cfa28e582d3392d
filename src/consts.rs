//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(180);

/// Time between movements of the snake while the speed boost is engaged
pub(crate) const BOOST_TICK_PERIOD: Duration = Duration::from_millis(80);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Width & height of the board, in cells
pub(crate) const BOARD_SIZE: Size = Size {
    width: 20,
    height: 20,
};

/// Length of the snake at the start of a run and after every reset
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food pellet
pub(crate) const FOOD_SYMBOL: char = '●';

/// Default style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Default style for the food pellet
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Default style for the board border
pub(crate) const BORDER_STYLE: Style = Style::new();
