// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (header, listing, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - sort_pill: Renders the sort pill and its popup menu
// - folder_list: Renders the folder/document listing
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (counts, location, errors)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod folder_list;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod sort_pill;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
