mod direction;
mod engine;
mod generator;
mod grid;
mod input;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::engine::Collision;
pub(crate) use self::grid::Grid;
pub(crate) use self::input::Input;
use self::snake::Snake;
use crate::consts;
use crate::settings::Settings;
use rand::Rng;
use ratatui::layout::Position;
use std::time::Duration;

/// The complete state of a game of snake-among-the-rocks, along with the
/// random number generator used to place food & rocks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: Settings,
    snake: Snake,
    food: Vec<Position>,
    obstacles: Vec<Position>,
    score: u32,
    interval: Duration,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            settings,
            snake: Snake::new(settings.grid.center(), consts::SPAWN_CELL),
            food: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            interval: settings.initial_interval,
            state: GameState::Running,
        };
        game.reset();
        game
    }

    /// Start the game over from scratch: a motionless snake in the middle of
    /// the grid, fresh food & rocks, no score, and the initial tick interval.
    /// May be called at any point, whether the game is over or not.
    pub(crate) fn reset(&mut self) {
        let grid = self.settings.grid;
        let food = self.generate(self.settings.food);
        let obstacles = self.generate(self.settings.obstacles);
        self.snake = Snake::new(grid.center(), consts::SPAWN_CELL);
        self.food = food;
        self.obstacles = obstacles;
        self.score = 0;
        self.interval = self.settings.initial_interval;
        self.state = GameState::Running;
        tracing::debug!(
            food = self.food.len(),
            obstacles = self.obstacles.len(),
            "Started new game"
        );
    }

    fn generate(&mut self, count: usize) -> Vec<Position> {
        generator::generate(
            &mut self.rng,
            self.settings.grid,
            count,
            consts::SPAWN_CELL,
        )
    }
}

impl<R> Game<R> {
    /// Return a read-only view of everything a front-end needs to draw the
    /// game
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.settings.grid,
            head: self.snake.head,
            body: &self.snake.body,
            food: &self.food,
            obstacles: &self.obstacles,
            score: self.score,
            crash: self.crash(),
        }
    }

    /// Time to wait before the next tick
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn terminated(&self) -> bool {
        self.crash().is_some()
    }

    /// Return what the snake crashed into, if the game is over
    pub(crate) fn crash(&self) -> Option<Collision> {
        match self.state {
            GameState::Running => None,
            GameState::Terminated(c) => Some(c),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake has hit a rock or itself.  Nothing changes until the game is
    /// reset.
    Terminated(Collision),
}

/// A borrowed view of a game's state between ticks
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,
    pub(crate) head: Position,
    /// Body segments, nearest the head first
    pub(crate) body: &'a [Position],
    pub(crate) food: &'a [Position],
    pub(crate) obstacles: &'a [Position],
    pub(crate) score: u32,
    /// What the snake crashed into, once the game is over
    pub(crate) crash: Option<Collision>,
}

impl Snapshot<'_> {
    pub(crate) fn terminated(&self) -> bool {
        self.crash.is_some()
    }
}
