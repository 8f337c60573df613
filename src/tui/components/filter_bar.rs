// Filter bar component
//
// Three search boxes (name, gender, email). The box being edited is
// highlighted and shows a cursor block.

use crate::table::Field;
use crate::tui::app::{App, Mode};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key that focuses each box, shown in its title
fn shortcut(field: Field) -> &'static str {
    match field {
        Field::Name => "/",
        Field::Gender => "g",
        Field::Email => "@",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(15),
            Constraint::Percentage(45),
        ])
        .split(area);

    for (&field, &chunk) in Field::all().iter().zip(chunks.iter()) {
        let editing = app.mode == Mode::EditFilter(field);
        let text = app.view.filter_state().get(field);

        let shown = if editing {
            format!("{}█", text)
        } else if text.is_empty() {
            match field {
                Field::Gender => "All".to_string(),
                _ => format!("Search by {}", field.header().to_lowercase()),
            }
        } else {
            text.to_string()
        };

        let style = if editing || !text.is_empty() {
            Style::default().fg(app.theme.foreground)
        } else {
            Style::default().fg(app.theme.muted)
        };

        let inner_width = chunk.width.saturating_sub(2) as usize;
        let input = Paragraph::new(truncate_to_width(&shown, inner_width))
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(app.theme.border_type)
                    .border_style(app.theme.border_style(editing))
                    .title(format!(" {} [{}] ", field.header(), shortcut(field))),
            );
        f.render_widget(input, chunk);
    }
}
