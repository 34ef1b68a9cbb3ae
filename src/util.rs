use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size in the middle of `area`.  If `area`
/// is too small, the result is clipped to fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [r] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [r] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(r);
    r
}
