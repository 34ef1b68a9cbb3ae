use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;

/// Pick `count` distinct random cells of `grid`, none of which is `excluded`.
///
/// Cells are drawn uniformly and redrawn whenever they hit `excluded` or a
/// cell already picked in this batch.  Nothing else is avoided: the result
/// may well land on the snake, on existing food, or on rocks.
///
/// If the grid doesn't have `count` cells to spare, as many as possible are
/// returned.
pub(crate) fn generate<R: Rng>(
    rng: &mut R,
    grid: Grid,
    count: usize,
    excluded: Position,
) -> Vec<Position> {
    let available = grid
        .cells()
        .saturating_sub(usize::from(grid.in_bounds(excluded)));
    let count = count.min(available);
    let mut placed = Vec::with_capacity(count);
    while placed.len() < count {
        let pos = Position::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if pos != excluded && !placed.contains(&pos) {
            placed.push(pos);
        }
    }
    placed
}
