use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Header row: folder title on the left, sort pill on the right
    pub title_area: Rect,
    pub pill_area: Rect,
    pub list_area: Rect,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Calculate the screen layout; the pill is right-aligned and `pill_width` wide
pub fn calculate_layout(terminal_size: Rect, pill_width: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, text, bottom border)
            Constraint::Min(3),    // Listing
            Constraint::Length(3), // Legend
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(pill_width)])
        .split(main_chunks[0]);

    LayoutInfo {
        title_area: header_chunks[0],
        pill_area: header_chunks[1],
        list_area: main_chunks[1],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}
