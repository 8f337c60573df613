// Status bar component
//
// Key hints for the current mode, plus uptime. Export and copy hints only
// show while there is something to export.

use crate::tui::app::{App, Mode};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Hint text for the current mode
pub fn hints(app: &App) -> String {
    match app.mode {
        Mode::EditFilter(field) => {
            format!("Editing {} filter │ type to search │ Enter/Esc done", field.header())
        }
        Mode::Dragging { .. } => "↑↓ choose position │ Enter drop │ Esc cancel".to_string(),
        Mode::Browse => {
            let mut parts = vec![
                "q quit",
                "↑↓ move",
                "Space select",
                "1/2/3 sort",
                "0 unsort",
                "/ @ g filter",
                "m move row",
            ];
            if app.view.selection_len() > 0 {
                parts.push("c clear");
            }
            if app.view.can_export() {
                parts.push("x export");
                parts.push("y copy");
            }
            parts.push("r reload");
            parts.join(" │ ")
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let uptime = format!(" ⏱ {} ", app.uptime());
    let width = (area.width as usize).saturating_sub(2 + uptime.chars().count());
    let text = format!("{}{}", truncate_to_width(&format!(" {}", hints(app)), width), uptime);

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.border_style(false)),
        );

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::source::FetchOutcome;
    use crate::table::{Field, Record};

    fn app() -> App {
        let mut app = App::new(Config::default(), LogBuffer::new(), "test".to_string());
        app.on_fetch(FetchOutcome::Loaded(vec![
            Record::new("Alice", "female", "a@x"),
            Record::new("Bob", "male", "b@x"),
        ]));
        app
    }

    #[test]
    fn export_hints_hidden_without_selection() {
        let app = app();
        assert!(!hints(&app).contains("x export"));
        assert!(!hints(&app).contains("y copy"));
    }

    #[test]
    fn export_hints_follow_visible_selection() {
        let mut app = app();
        app.view.toggle_select(0);
        assert!(hints(&app).contains("x export"));

        // Selected row filtered out of view
        app.view.set_filter(Field::Name, "Bob");
        assert!(!hints(&app).contains("x export"));
        assert!(hints(&app).contains("c clear"));
    }

    #[test]
    fn mode_specific_hints() {
        let mut app = app();
        app.mode = Mode::Dragging { from: 0 };
        assert!(hints(&app).contains("Esc cancel"));
        app.mode = Mode::EditFilter(Field::Email);
        assert!(hints(&app).contains("Email"));
    }
}
