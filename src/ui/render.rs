use crate::App;
use folderview::i18n::Translator;
use folderview::logic::sort_selector::SortSelector;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

use super::{folder_list, layout, legend, sort_pill, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let selector = SortSelector::new(&app.model.listing.sort, &app.catalog);
    let trigger = selector.trigger();
    let prefix = app.catalog.t("general:sortBy");

    let pill_width = sort_pill::pill_width(&trigger, &prefix, &app.icons).min(size.width);
    let layout_info = layout::calculate_layout(size, pill_width);

    // Header: folder path on the left
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            app.model.listing.root.display().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(title, layout_info.title_area);

    let menu_open = app.model.ui.sort_menu.is_some();
    sort_pill::render_sort_pill(
        f,
        layout_info.pill_area,
        &trigger,
        &prefix,
        &app.icons,
        menu_open,
    );

    // Listing
    let list_title = format!(
        "{} {}",
        app.catalog.t("general:sortedBy"),
        trigger.label
    );
    let mut temp_state = ListState::default();
    temp_state.select(app.model.listing.selected_index);
    folder_list::render_folder_list(
        f,
        layout_info.list_area,
        &list_title,
        &app.model.listing.items,
        &mut temp_state,
        trigger.field,
        &app.icons,
        &app.catalog,
        !menu_open,
    );
    // Sync back the selection
    app.model.listing.selected_index = temp_state.selected();

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        menu_open,
    );
    status_bar::render_status_bar(f, layout_info.status_area, &app.model.listing);

    // Popups last so they draw on top
    if let Some(menu_state) = &app.model.ui.sort_menu {
        let menu = selector.menu();
        sort_pill::render_sort_menu(f, layout_info.pill_area, &menu, menu_state.cursor, &app.icons);
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, layout_info.list_area, message);
    }
}
