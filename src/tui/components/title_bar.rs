// Title bar component
//
// Renders the app title with a loading spinner and the record source.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the app name, a spinner while a fetch is in flight, and row counts
/// once loaded.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.loading {
        format!(" {} loading users", app.spinner_char())
    } else {
        format!(
            " ── {} of {} users",
            app.visible_len(),
            app.view.len()
        )
    };

    let title = Paragraph::new(format!(" User Table{}", status))
        .style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title_top(Line::from(format!(" {} ", app.source_label)).right_aligned()),
        );

    f.render_widget(title, area);
}
