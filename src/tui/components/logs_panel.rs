// Logs panel component
//
// Shows the most recent captured log entries, colored by severity.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .log_buffer
        .tail(height)
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.warn,
                LogLevel::Info => theme.info,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            let prefix = format!(
                "{} {:<5} ",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str()
            );
            let message = truncate_to_width(&entry.message, width.saturating_sub(prefix.len()));
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.muted)),
                Span::styled(message, Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(" Logs "),
    );

    f.render_widget(list, area);
}
