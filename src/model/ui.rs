//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the sort menu, and transient messages.

use std::time::Instant;

/// Open sort menu; only the cursor lives here, the entries are derived
/// from the sort descriptor on every frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortMenuState {
    pub cursor: usize,
}

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Sort menu, when open
    pub sort_menu: Option<SortMenuState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            sort_menu: None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.sort_menu.is_some()
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }
}
