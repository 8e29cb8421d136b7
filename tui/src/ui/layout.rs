use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main analysis-screen regions.
///
/// # Returns
/// (header, body, hint)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits the body into (controls, results).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the results column into (prices, recommendation, impacts).
pub fn results(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);

    (rows[0], rows[1], rows[2])
}
