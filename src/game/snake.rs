use super::direction::Direction;
use ratatui::layout::Position;

/// Snake state.  Snate.
///
/// The head is tracked separately from the body.  The body trails one tick
/// behind the head: `body[0]` is wherever the head was on the previous tick,
/// and every later segment is wherever its predecessor was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the cells in the snake's body, nearest the head first
    pub(super) body: Vec<Position>,

    /// The direction in which the snake is currently heading
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a new, motionless snake with its head at `head` and a single
    /// body segment at `tail`
    pub(super) fn new(head: Position, tail: Position) -> Snake {
        Snake {
            head,
            body: vec![tail],
            direction: Direction::Idle,
        }
    }

    /// Turn the snake to face `direction` if that doesn't make it reverse or
    /// keep going along the axis it's already on.  Returns whether the turn
    /// was made.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        let ok = self.direction.permits(direction);
        if ok {
            self.direction = direction;
        }
        ok
    }

    /// Stop the snake in its tracks
    pub(super) fn halt(&mut self) {
        self.direction = Direction::Idle;
    }

    /// Drag every body segment forwards into the place of the one ahead of
    /// it, with the segment nearest the head taking the head's place.  The
    /// head itself is not moved.
    pub(super) fn follow(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.rotate_right(1);
        self.body[0] = self.head;
    }

    /// Append a new segment at `pos` to the end of the body
    pub(super) fn grow(&mut self, pos: Position) {
        self.body.push(pos);
    }

    /// Return whether the head overlaps any part of the body other than the
    /// segment directly behind it
    pub(super) fn bitten(&self) -> bool {
        self.body.iter().skip(1).any(|&p| p == self.head)
    }

    /// Number of cells in the body
    pub(super) fn len(&self) -> usize {
        self.body.len()
    }
}
