/// The direction in which the snake's head is heading.  `Idle` means the
/// snake has not started moving yet (or has stopped against a wall).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    #[default]
    Idle,
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the `(dx, dy)` offset by which the head moves each tick
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Direction::Idle => (0, 0),
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(crate) fn is_idle(self) -> bool {
        self == Direction::Idle
    }

    /// Return whether the snake, currently heading in `self`, may turn to
    /// `requested`.  Up/down turns are only allowed when there is no vertical
    /// motion, and left/right turns only when there is no horizontal motion,
    /// so the snake can never fold back onto itself.
    pub(crate) fn permits(self, requested: Direction) -> bool {
        let (dx, dy) = self.delta();
        match requested {
            Direction::North | Direction::South => dy == 0,
            Direction::East | Direction::West => dx == 0,
            Direction::Idle => false,
        }
    }
}
