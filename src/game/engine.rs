use super::{Game, GameState};
use rand::Rng;
use ratatui::layout::Position;
use std::time::Duration;

/// What happened during a call to [`Game::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game is already over; nothing changed.
    Over,

    /// The snake isn't moving; nothing changed.
    Idle,

    /// The snake tried to leave the grid and was stopped at the edge.
    Halted,

    /// The snake moved one cell.
    Moved,

    /// The snake moved one cell and ate the food there.
    Ate,

    /// The snake moved one cell and ran into something, ending the game.
    Crashed(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Rock,
    Body,
}

impl<R: Rng> Game<R> {
    /// Advance the game by one tick.
    ///
    /// The body is dragged along behind the head before anything is checked,
    /// so the head can safely move into the cell the tail just vacated.  When
    /// the snake crashes, its head still ends up inside whatever it crashed
    /// into.
    pub(crate) fn advance(&mut self) -> Tick {
        if self.terminated() {
            return Tick::Over;
        }
        if self.snake.direction.is_idle() {
            return Tick::Idle;
        }
        let old_head = self.snake.head;
        let Some(target) = self.settings.grid.step(old_head, self.snake.direction) else {
            tracing::debug!(
                head = ?old_head,
                direction = ?self.snake.direction,
                "Snake stopped at edge of grid"
            );
            self.snake.halt();
            return Tick::Halted;
        };
        self.snake.follow();
        let ate = self.eat(target, old_head);
        let mut collision = self
            .obstacles
            .contains(&target)
            .then_some(Collision::Rock);
        self.snake.head = target;
        if collision.is_none() && self.snake.bitten() {
            collision = Some(Collision::Body);
        }
        if let Some(c) = collision {
            self.state = GameState::Terminated(c);
            tracing::info!(
                collision = ?c,
                head = ?target,
                score = self.score,
                length = self.snake.len(),
                "Game over"
            );
            Tick::Crashed(c)
        } else if ate {
            Tick::Ate
        } else {
            Tick::Moved
        }
    }

    /// If there's food at `target`, eat it: the snake grows a segment at
    /// `old_head`, one new food item and one new rock are placed, the score
    /// goes up, and the game speeds up.  At most one food item is eaten.
    fn eat(&mut self, target: Position, old_head: Position) -> bool {
        let Some(i) = self.food.iter().position(|&p| p == target) else {
            return false;
        };
        let _ = self.food.remove(i);
        self.snake.grow(old_head);
        let food = self.generate(1);
        self.food.extend(food);
        let rocks = self.generate(1);
        self.obstacles.extend(rocks);
        self.score = self.score.saturating_add(1);
        self.interval = quicken(
            self.interval,
            self.settings.interval_step,
            self.settings.min_interval,
        );
        tracing::debug!(
            score = self.score,
            length = self.snake.len(),
            rocks = self.obstacles.len(),
            interval = ?self.interval,
            "Snake ate"
        );
        true
    }
}

/// Shorten the time between ticks by `step`, but not below `floor`
fn quicken(interval: Duration, step: Duration, floor: Duration) -> Duration {
    interval.saturating_sub(step).max(floor)
}

#[cfg(test)]
mod tests {
    use super::super::{Direction, Grid, Snake};
    use super::*;
    use crate::consts;
    use crate::settings::Settings;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn game_at(
        head: Position,
        body: &[Position],
        direction: Direction,
        food: &[Position],
        obstacles: &[Position],
    ) -> Game<ChaCha12Rng> {
        let settings = Settings {
            grid: Grid::new(10, 10),
            food: 1,
            obstacles: 0,
            ..Settings::default()
        };
        let mut game = Game::new_with_rng(settings, ChaCha12Rng::seed_from_u64(RNG_SEED));
        game.snake = Snake {
            head,
            body: body.to_vec(),
            direction,
        };
        game.food = food.to_vec();
        game.obstacles = obstacles.to_vec();
        game
    }

    #[test]
    fn idle_does_nothing() {
        let mut game = game_at(
            Position::new(5, 5),
            &[Position::new(4, 5)],
            Direction::Idle,
            &[Position::new(5, 5)],
            &[Position::new(6, 5)],
        );
        let before = game.clone();
        for _ in 0..5 {
            assert_eq!(game.advance(), Tick::Idle);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn move_one_cell() {
        let mut game = game_at(
            Position::new(5, 5),
            &[Position::new(4, 5), Position::new(3, 5)],
            Direction::East,
            &[Position::new(0, 0)],
            &[Position::new(9, 9)],
        );
        assert_eq!(game.advance(), Tick::Moved);
        assert_eq!(game.snake.head, Position::new(6, 5));
        assert_eq!(game.snake.body, [Position::new(5, 5), Position::new(4, 5)]);
        assert_eq!(game.score, 0);
        assert!(!game.terminated());
    }

    #[test]
    fn eat_food() {
        let mut game = game_at(
            Position::new(5, 5),
            &[Position::new(4, 5)],
            Direction::East,
            &[Position::new(6, 5)],
            &[],
        );
        let _ = game.advance();
        assert_eq!(game.snake.head, Position::new(6, 5));
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.food.len(), 1);
        assert_eq!(game.obstacles.len(), 1);
        assert!(game.food.iter().all(|&p| game.settings.grid.in_bounds(p)));
        assert!(game.obstacles.iter().all(|&p| game.settings.grid.in_bounds(p)));
        assert_eq!(
            game.interval(),
            consts::INITIAL_INTERVAL - consts::INTERVAL_STEP
        );
    }

    #[test]
    fn eat_food_on_spawn_cell() {
        // Nothing is ever generated on the spawn cell, so the new rock can't
        // land under the head.
        let mut game = game_at(
            Position::new(4, 5),
            &[Position::new(3, 5)],
            Direction::East,
            &[Position::new(1, 1), consts::SPAWN_CELL, Position::new(8, 8)],
            &[Position::new(0, 9)],
        );
        assert_eq!(game.advance(), Tick::Ate);
        assert_eq!(game.snake.head, consts::SPAWN_CELL);
        assert_eq!(game.snake.body, [Position::new(4, 5), Position::new(4, 5)]);
        assert_eq!(game.food.len(), 3);
        assert_eq!(game.food[0], Position::new(1, 1));
        assert_eq!(game.food[1], Position::new(8, 8));
        assert!(!game.food.contains(&consts::SPAWN_CELL));
        assert_eq!(game.obstacles.len(), 2);
        assert!(!game.terminated());
        assert_eq!(game.score, 1);
    }

    #[test]
    fn rock_dropped_under_head() {
        // On a 3x1 grid the rock placed after eating lands on the cell the
        // head just entered a third of the time.
        let target = Position::new(2, 0);
        let mut crashes = 0;
        for seed in 0..32 {
            let mut game = game_at(
                Position::new(1, 0),
                &[Position::new(0, 0)],
                Direction::East,
                &[target],
                &[],
            );
            game.settings.grid = Grid::new(3, 1);
            game.rng = ChaCha12Rng::seed_from_u64(seed);
            let outcome = game.advance();
            assert_eq!(game.score, 1);
            assert_eq!(game.snake.head, target);
            assert_eq!(game.obstacles.len(), 1);
            if game.obstacles.contains(&target) {
                assert_eq!(outcome, Tick::Crashed(Collision::Rock));
                assert!(game.terminated());
                crashes += 1;
            } else {
                assert_eq!(outcome, Tick::Ate);
                assert!(!game.terminated());
            }
        }
        assert!(crashes > 0);
        assert!(crashes < 32);
    }

    #[rstest]
    #[case(Position::new(9, 5), Direction::East)]
    #[case(Position::new(0, 5), Direction::West)]
    #[case(Position::new(5, 0), Direction::North)]
    #[case(Position::new(5, 9), Direction::South)]
    fn halt_at_wall(#[case] head: Position, #[case] direction: Direction) {
        let body = [Position::new(5, 5)];
        let mut game = game_at(head, &body, direction, &[Position::new(2, 2)], &[]);
        assert_eq!(game.advance(), Tick::Halted);
        assert_eq!(game.snake.head, head);
        assert_eq!(game.snake.body, body);
        assert_eq!(game.snake.direction, Direction::Idle);
        assert!(!game.terminated());
        assert_eq!(game.advance(), Tick::Idle);
    }

    #[test]
    fn hit_rock() {
        let mut game = game_at(
            Position::new(2, 2),
            &[Position::new(1, 2)],
            Direction::East,
            &[Position::new(9, 9)],
            &[Position::new(7, 7), Position::new(3, 2)],
        );
        assert_eq!(game.advance(), Tick::Crashed(Collision::Rock));
        assert!(game.terminated());
        assert_eq!(game.snake.head, Position::new(3, 2));
        assert_eq!(game.snake.body, [Position::new(2, 2)]);
    }

    #[test]
    fn bite_self() {
        let mut game = game_at(
            Position::new(5, 5),
            &[
                Position::new(6, 5),
                Position::new(6, 4),
                Position::new(5, 4),
                Position::new(4, 4),
            ],
            Direction::North,
            &[Position::new(9, 9)],
            &[],
        );
        assert_eq!(game.advance(), Tick::Crashed(Collision::Body));
        assert!(game.terminated());
        assert_eq!(game.snake.head, Position::new(5, 4));
        assert_eq!(
            game.snake.body,
            [
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 4),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn chase_tail() {
        let mut game = game_at(
            Position::new(5, 5),
            &[Position::new(6, 5), Position::new(6, 4), Position::new(5, 4)],
            Direction::North,
            &[Position::new(9, 9)],
            &[],
        );
        assert_eq!(game.advance(), Tick::Moved);
        assert!(!game.terminated());
        assert_eq!(game.snake.head, Position::new(5, 4));
    }

    #[test]
    fn over_is_frozen() {
        let mut game = game_at(
            Position::new(3, 2),
            &[Position::new(2, 2)],
            Direction::East,
            &[Position::new(4, 2)],
            &[Position::new(3, 2)],
        );
        game.state = GameState::Terminated(Collision::Rock);
        let before = game.clone();
        for _ in 0..5 {
            assert_eq!(game.advance(), Tick::Over);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn speed_ramp_bottoms_out() {
        let mut game = game_at(
            Position::new(5, 5),
            &[Position::new(4, 5)],
            Direction::East,
            &[],
            &[],
        );
        let target = Position::new(6, 5);
        let mut last = game.interval();
        for _ in 0..50 {
            game.food = vec![target];
            assert!(game.eat(target, Position::new(5, 5)));
            assert!(game.interval() <= last);
            assert!(game.interval() >= consts::MIN_INTERVAL);
            last = game.interval();
        }
        assert_eq!(game.interval(), consts::MIN_INTERVAL);
        assert_eq!(game.score, 50);
        assert_eq!(game.obstacles.len(), 50);
    }

    #[rstest]
    #[case(80, 2, 20, 78)]
    #[case(22, 2, 20, 20)]
    #[case(21, 2, 20, 20)]
    #[case(20, 2, 20, 20)]
    #[case(80, 0, 20, 80)]
    #[case(1, 5, 1, 1)]
    fn test_quicken(#[case] interval: u64, #[case] step: u64, #[case] floor: u64, #[case] r: u64) {
        assert_eq!(
            quicken(
                Duration::from_millis(interval),
                Duration::from_millis(step),
                Duration::from_millis(floor)
            ),
            Duration::from_millis(r)
        );
    }
}
