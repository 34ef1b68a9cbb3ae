//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Position,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default width of the grid in cells
pub(crate) const GRID_WIDTH: u16 = 60;

/// Default height of the grid in cells
pub(crate) const GRID_HEIGHT: u16 = 40;

/// Default time between movements of the snake at the start of a game
pub(crate) const INITIAL_INTERVAL: Duration = Duration::from_millis(80);

/// Default floor for the time between movements of the snake
pub(crate) const MIN_INTERVAL: Duration = Duration::from_millis(20);

/// Default amount by which the time between movements shrinks each time the
/// snake eats
pub(crate) const INTERVAL_STEP: Duration = Duration::from_millis(2);

/// Default number of food items placed at the start of a game
pub(crate) const INITIAL_FOOD: usize = 10;

/// Default number of rocks placed at the start of a game
pub(crate) const INITIAL_OBSTACLES: usize = 10;

/// The cell occupied by the snake's lone body segment at the start of a game.
/// Food & rocks are never generated here.
pub(crate) const SPAWN_CELL: Position = Position { x: 5, y: 5 };

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for rocks
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with a rock or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Style for food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for rocks
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Red);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
