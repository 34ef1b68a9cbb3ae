use super::{Direction, Game};
use rand::Rng;

/// A request from the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// Point the snake in the given direction
    Turn(Direction),

    /// Start a new game once the current one is over
    Restart,
}

impl<R: Rng> Game<R> {
    /// Apply a player request to the game.  Turns are ignored once the game
    /// is over, and restarts are ignored until it is.  Returns whether
    /// anything changed.
    pub(crate) fn apply(&mut self, input: Input) -> bool {
        match (input, self.terminated()) {
            (Input::Turn(dir), false) => self.steer(dir),
            (Input::Restart, true) => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Turn the snake to face `direction`, unless it's already moving along
    /// the same axis
    fn steer(&mut self, direction: Direction) -> bool {
        let turned = self.snake.turn(direction);
        if turned {
            tracing::trace!(?direction, "Snake turned");
        }
        turned
    }
}
