//! Keyboard Input Handler
//!
//! The sort menu captures input while open; otherwise keys move the
//! listing selection and trigger sort shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folderview::logic;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    let vim = app.model.ui.vim_mode;

    // Sort menu is modal
    if app.model.has_modal() {
        match key.code {
            KeyCode::Down => app.move_sort_cursor(true),
            KeyCode::Up => app.move_sort_cursor(false),
            KeyCode::Char('j') if vim => app.move_sort_cursor(true),
            KeyCode::Char('k') if vim => app.move_sort_cursor(false),
            KeyCode::Enter | KeyCode::Char(' ') => app.apply_sort_menu_entry(),
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => app.close_sort_menu(),
            _ => {} // Ignore other keys while the menu is showing
        }
        return;
    }

    let len = app.model.listing.items.len();
    let selected = app.model.listing.selected_index;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('s') => app.toggle_sort_menu(),
        KeyCode::Char('r') => app.reverse_sort(),
        KeyCode::F(5) => app.refresh_listing(),
        KeyCode::Down => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, 1, len)
        }
        KeyCode::Up => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, -1, len)
        }
        KeyCode::PageDown => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, 10, len)
        }
        KeyCode::PageUp => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, -10, len)
        }
        KeyCode::Home => app.model.listing.selected_index = logic::ui::move_selection(None, 0, len),
        KeyCode::End => {
            app.model.listing.selected_index = len.checked_sub(1);
        }
        KeyCode::Char('j') if vim => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, 1, len)
        }
        KeyCode::Char('k') if vim => {
            app.model.listing.selected_index = logic::ui::move_selection(selected, -1, len)
        }
        KeyCode::Char('g') if vim => {
            app.model.listing.selected_index = logic::ui::move_selection(None, 0, len)
        }
        KeyCode::Char('G') if vim => {
            app.model.listing.selected_index = len.checked_sub(1);
        }
        _ => {}
    }
}
