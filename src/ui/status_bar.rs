use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use folderview::model::ListingModel;

/// Status line parts: counts, location, loading or error state
fn build_status_parts(listing: &ListingModel) -> Vec<(String, String)> {
    let folders = listing.items.iter().filter(|i| i.is_folder()).count();
    let documents = listing.items.len() - folders;

    let mut parts = vec![
        ("Folders:".to_string(), format!(" {}", folders)),
        ("Documents:".to_string(), format!(" {}", documents)),
        ("Location:".to_string(), format!(" {}", listing.location)),
    ];

    if listing.loading {
        parts.push(("Loading…".to_string(), String::new()));
    }
    if let Some(error) = &listing.last_error {
        parts.push(("Error:".to_string(), format!(" {}", error)));
    }

    parts
}

pub fn render_status_bar(f: &mut Frame, area: Rect, listing: &ListingModel) {
    let mut spans = vec![];
    for (idx, (label, value)) in build_status_parts(listing).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        let label_color = if label == "Error:" {
            Color::Red
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(label, Style::default().fg(label_color)));
        spans.push(Span::raw(value));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
