use ratatui::{
    style::{Color, Style},
    text::Span,
};

use folderview::folder::ItemKind;
use folderview::SortDirection;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

impl IconMode {
    /// Parse the config value; anything unknown means Nerd Fonts
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            _ => IconMode::NerdFont,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub document_color: Color,
    pub direction_color: Color,
    pub chevron_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            document_color: Color::Cyan,
            direction_color: Color::Yellow,
            chevron_color: Color::DarkGray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Folder or document icon for a listing row
    pub fn item_icon(&self, kind: ItemKind) -> Span<'static> {
        match (kind, self.mode) {
            (ItemKind::Folder, IconMode::Emoji) => {
                Span::styled("📁 ", Style::default().fg(self.theme.folder_color))
            }
            (ItemKind::Folder, IconMode::NerdFont) => {
                Span::styled("\u{E5FF} ", Style::default().fg(self.theme.folder_color))
            }
            (ItemKind::Document, IconMode::Emoji) => {
                Span::styled("📄 ", Style::default().fg(self.theme.document_color))
            }
            (ItemKind::Document, IconMode::NerdFont) => {
                Span::styled("\u{F15B} ", Style::default().fg(self.theme.document_color))
            }
        }
    }

    /// Arrow shown on the sort pill and next to direction options
    pub fn direction_icon(&self, direction: SortDirection) -> Span<'static> {
        let icon = match (direction, self.mode) {
            (SortDirection::Asc, IconMode::Emoji) => "⬆️",
            (SortDirection::Desc, IconMode::Emoji) => "⬇️",
            // nf-fa-sort_amount_asc / nf-fa-sort_amount_desc
            (SortDirection::Asc, IconMode::NerdFont) => "\u{F160}",
            (SortDirection::Desc, IconMode::NerdFont) => "\u{F161}",
        };
        Span::styled(icon, Style::default().fg(self.theme.direction_color))
    }

    /// Dropdown marker at the end of the pill
    pub fn chevron(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "▾",
            IconMode::NerdFont => "\u{F078}",
        };
        Span::styled(icon, Style::default().fg(self.theme.chevron_color))
    }

    /// Check mark for the active menu entries
    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "✓",
            IconMode::NerdFont => "\u{F00C}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mode_from_config() {
        assert_eq!(IconMode::from_config("emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("Emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("nerdfont"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("whatever"), IconMode::NerdFont);
    }

    #[test]
    fn test_direction_icons_differ() {
        let icons = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        assert_ne!(
            icons.direction_icon(SortDirection::Asc).content,
            icons.direction_icon(SortDirection::Desc).content
        );
    }
}
