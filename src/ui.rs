use crate::consts;
use crate::game::{Collision, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Never draw the game screen narrower than this, so that the messages under
/// the grid fit
const MIN_DISPLAY_WIDTH: u16 = 32;

/// A widget drawing the score bar, the grid & everything on it, and any
/// messages for the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameView<'a> {
    pub(crate) snapshot: Snapshot<'a>,
    pub(crate) paused: bool,
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        let grid_size = snap.grid.size();
        let block_size = Size {
            width: grid_size.width.saturating_add(2),
            height: grid_size.height.saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: block_size.width.max(MIN_DISPLAY_WIDTH),
                height: block_size.height.saturating_add(3),
            },
        );
        let [score_area, block_row, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(block_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", snap.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_area = center_rect(block_row, block_size);
        Block::bordered().render(block_area, buf);
        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &p in snap.body {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        for &p in snap.food {
            level.draw_cell(p, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &p in snap.obstacles {
            level.draw_cell(p, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if snap.terminated() {
            level.draw_cell(snap.head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            level.draw_cell(snap.head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
        }

        let (msg, key, action) = match snap.crash {
            Some(Collision::Rock) => (" Oh no, you hit a rock!", "SPACE", "play again"),
            Some(Collision::Body) => (" Oh no, you bit yourself!", "SPACE", "play again"),
            None if self.paused => (" PAUSED", "p", "resume"),
            None => return,
        };
        Span::from(msg).render(msg1_area, buf);
        Line::from_iter([
            Span::raw(" Press "),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(format!(" to {action}")),
        ])
        .render(msg2_area, buf);
    }
}

/// The region of the buffer in which grid cells are drawn
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if pos.x >= self.area.width || pos.y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}
