//! Sort pill and its popup menu
//!
//! The pill shows the active field label and direction. The menu lists
//! field options, a separator, then direction options.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folderview::logic::sort_selector::{MenuEntry, SortAction, SortMenu, Trigger};

use super::icons::IconRenderer;

/// Spans of the closed pill: `<prefix>: <label> <arrow> <chevron>`
pub fn pill_spans(trigger: &Trigger, prefix: &str, icons: &IconRenderer) -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        Span::styled(format!("{}: ", prefix), Style::default().fg(Color::Gray)),
        Span::styled(
            trigger.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        icons.direction_icon(trigger.direction),
        Span::raw(" "),
        icons.chevron(),
        Span::raw(" "),
    ]
}

/// Render the pill; highlighted while its menu is open
pub fn render_sort_pill(
    f: &mut Frame,
    area: Rect,
    trigger: &Trigger,
    prefix: &str,
    icons: &IconRenderer,
    open: bool,
) {
    let border_color = if open { Color::Yellow } else { Color::DarkGray };
    let pill = Paragraph::new(Line::from(pill_spans(trigger, prefix, icons))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(pill, area);
}

/// Width the pill needs, borders included
pub fn pill_width(trigger: &Trigger, prefix: &str, icons: &IconRenderer) -> u16 {
    let text: u16 = pill_spans(trigger, prefix, icons)
        .iter()
        .map(|span| span.content.width() as u16)
        .sum();
    text + 2
}

/// List row of a menu cursor; the separator occupies one row
pub fn cursor_row(menu: &SortMenu, cursor: usize) -> usize {
    if cursor < menu.fields.len() {
        cursor
    } else {
        cursor + 1
    }
}

fn entry_item(entry: &MenuEntry, icons: &IconRenderer) -> ListItem<'static> {
    let marker = if entry.selected { icons.check() } else { " " };
    let mut spans = vec![
        Span::styled(format!("{} ", marker), Style::default().fg(Color::Green)),
        Span::raw(entry.label.clone()),
    ];
    if let SortAction::SelectDirection(direction) = entry.action {
        spans.push(Span::raw(" "));
        spans.push(icons.direction_icon(direction));
    }

    let style = if entry.selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    ListItem::new(Line::from(spans)).style(style)
}

/// Popup area: directly below the anchor, shifted left to stay on screen
/// and cut short at the bottom edge
pub fn menu_area(anchor: Rect, screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let y = anchor.bottom().min(screen.bottom());
    Rect {
        x: anchor.x.min(screen.right().saturating_sub(width)),
        y,
        width,
        height: height.min(screen.bottom() - y),
    }
}

/// Render the popup menu below the pill
pub fn render_sort_menu(
    f: &mut Frame,
    anchor: Rect,
    menu: &SortMenu,
    cursor: usize,
    icons: &IconRenderer,
) {
    let label_width = menu
        .entries()
        .map(|e| e.label.width())
        .max()
        .unwrap_or(0) as u16;

    let mut items: Vec<ListItem> = menu.fields.iter().map(|e| entry_item(e, icons)).collect();
    items.push(ListItem::new(Span::styled(
        "─".repeat(label_width as usize + 4),
        Style::default().fg(Color::DarkGray),
    )));
    items.extend(menu.directions.iter().map(|e| entry_item(e, icons)));

    let menu_area = menu_area(anchor, f.area(), label_width + 10, items.len() as u16 + 2);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(cursor_row(menu, cursor)));

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(list, menu_area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::{IconMode, IconTheme};
    use folderview::i18n::Catalog;
    use folderview::logic::sort_selector::SortSelector;

    #[test]
    fn test_cursor_row_skips_separator() {
        let catalog = Catalog::english();
        let menu = SortSelector::new("createdAt", &catalog).menu();

        assert_eq!(cursor_row(&menu, 0), 0);
        assert_eq!(cursor_row(&menu, 2), 2);
        assert_eq!(cursor_row(&menu, 3), 4);
        assert_eq!(cursor_row(&menu, 4), 5);
    }

    #[test]
    fn test_menu_opens_below_pill() {
        let screen = Rect::new(0, 0, 100, 30);
        let pill = Rect::new(40, 0, 30, 3);

        assert_eq!(menu_area(pill, screen, 24, 8), Rect::new(40, 3, 24, 8));
    }

    #[test]
    fn test_menu_stays_on_screen() {
        let screen = Rect::new(0, 0, 100, 10);
        // Pill flush with the right edge
        let pill = Rect::new(70, 0, 30, 3);

        let area = menu_area(pill, screen, 40, 20);
        assert_eq!(area, Rect::new(60, 3, 40, 7));
        assert_eq!(area.right(), screen.right());

        // Too narrow for the menu
        let tiny = Rect::new(0, 0, 20, 4);
        assert_eq!(menu_area(pill, tiny, 40, 20), Rect::new(0, 3, 20, 1));
    }

    #[test]
    fn test_pill_shows_label() {
        let catalog = Catalog::english();
        let icons = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        let trigger = SortSelector::new("-createdAt", &catalog).trigger();

        let text: String = pill_spans(&trigger, "Sort", &icons)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Sort: Created At"));
        assert!(text.contains("⬇️"));
        assert!(pill_width(&trigger, "Sort", &icons) > "Sort: Created At".len() as u16);
    }
}
