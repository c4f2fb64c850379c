use super::icons::IconRenderer;
use folderview::folder::FolderItem;
use folderview::i18n::Translator;
use folderview::SortField;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Format a timestamp for the listing (e.g., "2025-10-26 20:58")
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Timestamp column shown next to each row: the one the listing is sorted
/// by, or the update time when sorting by title
fn info_for(item: &FolderItem, field: SortField) -> String {
    match field {
        SortField::CreatedAt => format_timestamp(&item.created_at),
        SortField::DocumentTitle | SortField::UpdatedAt => format_timestamp(&item.updated_at),
    }
}

fn build_list_item<'a>(
    item: &'a FolderItem,
    icons: &IconRenderer,
    panel_width: u16,
    field: SortField,
) -> ListItem<'a> {
    let icon = icons.item_icon(item.kind);
    let info = info_for(item, field);

    // panel_width - borders(2) - highlight(2) - padding(2)
    let available_width = panel_width.saturating_sub(6) as usize;
    let name_width = icon.content.width() + item.name.width();
    let info_width = info.width();

    let name_span = if item.is_folder() {
        Span::styled(&item.name, Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(&item.name)
    };

    if name_width + 2 + info_width <= available_width {
        let padding = available_width - name_width - info_width;
        return ListItem::new(Line::from(vec![
            icon,
            name_span,
            Span::raw(" ".repeat(padding)),
            Span::styled(info, Style::default().fg(Color::Rgb(120, 120, 120))),
        ]));
    }

    // Not enough room: name only
    ListItem::new(Line::from(vec![icon, name_span]))
}

#[allow(clippy::too_many_arguments)]
pub fn render_folder_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[FolderItem],
    state: &mut ListState,
    field: SortField,
    icons: &IconRenderer,
    translator: &dyn Translator,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border_color));

    if items.is_empty() {
        let empty = Paragraph::new(translator.t("general:noResults"))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| build_list_item(item, icons, area.width, field))
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folderview::folder::ItemKind;

    #[test]
    fn test_info_follows_sorted_field() {
        let item = FolderItem {
            name: "a".to_string(),
            kind: ItemKind::Document,
            created_at: "2020-01-01T12:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T12:00:00Z".parse().unwrap(),
        };
        assert!(info_for(&item, SortField::CreatedAt).starts_with("2020"));
        assert!(info_for(&item, SortField::UpdatedAt).starts_with("2024"));
        assert!(info_for(&item, SortField::DocumentTitle).starts_with("2024"));
    }
}
