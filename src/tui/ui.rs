// UI rendering logic
//
// Lays out the screen and hands each area to its component. Called on every
// frame; holds no state of its own.

use super::app::App;
use super::components::{filter_bar, logs_panel, status_bar, table_panel, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Title, filters, table, logs, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Filter boxes
            Constraint::Min(6),    // Table - takes remaining space
            Constraint::Length(6), // System logs
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    filter_bar::render(f, chunks[1], app);
    table_panel::render(f, chunks[2], app);
    logs_panel::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);

    // Toast renders last so it overlays everything
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
