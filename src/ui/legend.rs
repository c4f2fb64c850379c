use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, menu_open: bool) -> Vec<Span<'static>> {
    let nav = if vim_mode { "j/k" } else { "↑/↓" };

    if menu_open {
        return vec![
            key(nav),
            Span::raw(":Move  "),
            key("Enter"),
            Span::raw(":Apply  "),
            key("Esc"),
            Span::raw(":Close"),
        ];
    }

    vec![
        key(nav),
        Span::raw(":Nav  "),
        key("s"),
        Span::raw(":Sort  "),
        key("r"),
        Span::raw(":Reverse  "),
        key("F5"),
        Span::raw(":Refresh  "),
        key("q"),
        Span::raw(":Quit"),
    ]
}

pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, menu_open: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, menu_open)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .wrap(Wrap { trim: false });
    f.render_widget(legend, area);
}
