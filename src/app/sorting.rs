//! Sorting orchestration methods
//!
//! The App owns the folder data, so it is the context the sort pill
//! reads its descriptor from and hands new descriptors to:
//! - Sort menu open/close and cursor movement
//! - Applying menu entries through the sort selector
//! - Refining the listing (location update + background refresh)

use folderview::folder::{FolderDataContext, RefineOptions};
use folderview::i18n::Translator;
use folderview::logic::{self, sort_selector::SortAction, sort_selector::SortSelector};
use folderview::model::SortMenuState;

use crate::App;

impl FolderDataContext for App {
    fn sort(&self) -> &str {
        &self.model.listing.sort
    }

    fn refine_folder_data(&mut self, options: RefineOptions) {
        let generation = self.model.listing.refine(options);
        self.request_listing(generation);
    }
}

impl App {
    pub(crate) fn open_sort_menu(&mut self) {
        let selector = SortSelector::new(&self.model.listing.sort, &self.catalog);
        let cursor = selector.menu().selected_field_index();
        self.model.ui.sort_menu = Some(SortMenuState { cursor });
    }

    pub(crate) fn close_sort_menu(&mut self) {
        self.model.ui.sort_menu = None;
    }

    pub(crate) fn toggle_sort_menu(&mut self) {
        if self.model.ui.sort_menu.is_some() {
            self.close_sort_menu();
        } else {
            self.open_sort_menu();
        }
    }

    pub(crate) fn move_sort_cursor(&mut self, down: bool) {
        let len = SortSelector::new(&self.model.listing.sort, &self.catalog)
            .menu()
            .len();
        if let Some(menu_state) = self.model.ui.sort_menu.as_mut() {
            menu_state.cursor = if down {
                logic::ui::next_index(menu_state.cursor, len)
            } else {
                logic::ui::prev_index(menu_state.cursor, len)
            };
        }
    }

    /// Apply the entry under the menu cursor
    pub(crate) fn apply_sort_menu_entry(&mut self) {
        let Some(cursor) = self.model.ui.sort_menu.as_ref().map(|m| m.cursor) else {
            return;
        };
        let action = SortSelector::new(&self.model.listing.sort, &self.catalog)
            .menu()
            .get(cursor)
            .map(|entry| entry.action);

        match action {
            Some(action) => self.apply_sort_action(action),
            None => self.close_sort_menu(),
        }
    }

    /// Flip the direction through the selector's direction action
    pub(crate) fn reverse_sort(&mut self) {
        let direction = logic::descriptor::direction(&self.model.listing.sort);
        self.apply_sort_action(SortAction::SelectDirection(direction.flipped()));
    }

    pub(crate) fn apply_sort_action(&mut self, action: SortAction) {
        let mut requested = None;
        let mut close = false;
        SortSelector::new(&self.model.listing.sort, &self.catalog).dispatch(
            action,
            |next| requested = Some(next),
            || close = true,
        );

        if close {
            self.close_sort_menu();
        }

        if let Some(next) = requested {
            let update_url = self.update_url;
            self.refine_folder_data(RefineOptions::sort(next, update_url));

            let trigger = SortSelector::new(&self.model.listing.sort, &self.catalog).trigger();
            let message = format!(
                "{} {} ({})",
                self.catalog.t("general:sortedBy"),
                trigger.label,
                self.catalog.t(trigger.direction.label_key())
            );
            self.model.ui.show_toast(message);
        }
    }

    /// Re-scan the folder with the current sort
    pub(crate) fn refresh_listing(&mut self) {
        let generation = self.model.listing.begin_refresh();
        self.request_listing(generation);
    }
}
