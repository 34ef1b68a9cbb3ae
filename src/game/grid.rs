use super::direction::Direction;
use ratatui::layout::{Position, Size};

/// The fixed rectangle of cells that the game is played on.  The top-left
/// cell is `(0, 0)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn in_bounds(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Return the cell one step from `pos` in direction `dir`, or `None` if
    /// that would take the snake off of the grid
    pub(crate) fn step(self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let x = pos.x.checked_add_signed(i16::from(dx))?;
        let y = pos.y.checked_add_signed(i16::from(dy))?;
        Some(Position { x, y }).filter(|&p| self.in_bounds(p))
    }

    /// Return the cell in the middle of the grid
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Total number of cells in the grid
    pub(crate) fn cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}
