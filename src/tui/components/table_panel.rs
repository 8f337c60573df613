//! User table component
//!
//! Draws the rendered view (filtered, then sorted) with a selection mark
//! column, sort arrows in the header, and distinct styles for the cursor
//! row, selected rows and a row being dragged.
//!
//! Scrolling follows the cursor: the window only moves once the cursor would
//! leave it.

use crate::table::Field;
use crate::tui::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table},
    Frame,
};

/// Rows taken up by the header line plus its bottom margin
const HEADER_HEIGHT: usize = 2;

/// Calculate the visible row window for a cursor position
///
/// Returns `(start, end)` with `end` exclusive. The cursor is always inside
/// the window when `total > 0`.
pub fn visible_range(cursor: usize, total: usize, height: usize) -> (usize, usize) {
    if total == 0 || height == 0 {
        return (0, 0);
    }

    let offset = if cursor >= height {
        cursor.saturating_sub(height - 1)
    } else {
        0
    };

    (offset, (offset + height).min(total))
}

/// Header label with the sort arrow when this column is the active key
fn header_label(app: &App, field: Field) -> String {
    let sort = app.view.sort_state();
    match sort.key {
        Some(key) if key == field => format!("{} {}", field.header(), sort.direction.arrow()),
        _ => field.header().to_string(),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rendered = app.view.rendered();

    let title = match app.mode {
        Mode::Dragging { from } => format!(" Users ── moving row {} ", from + 1),
        _ => " Users ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(matches!(app.mode, Mode::Dragging { .. })))
        .title(title)
        .title_bottom(
            Line::from(format!(" {} selected ", app.view.selection_len())).right_aligned(),
        );

    if rendered.is_empty() {
        let message = if app.loading {
            "Loading users..."
        } else if app.view.is_empty() {
            "No users loaded (r to retry)"
        } else {
            "No users match the current filters"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let height = (area.height as usize).saturating_sub(2 + HEADER_HEIGHT);
    let (start, end) = visible_range(app.cursor, rendered.len(), height);
    let dragging_from = match app.mode {
        Mode::Dragging { from } => Some(from),
        _ => None,
    };

    let mut header_cells = vec![Cell::from(" "), Cell::from("#")];
    header_cells.extend(
        Field::all()
            .iter()
            .map(|&field| Cell::from(header_label(app, field))),
    );
    let header = TableRow::new(header_cells)
        .style(
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<TableRow> = rendered[start..end]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let index = start + offset;
            let selected = app.view.is_selected(row.id);
            let mark = if dragging_from == Some(index) {
                "≡"
            } else if selected {
                "✓"
            } else {
                " "
            };

            let style = if index == app.cursor {
                theme.cursor_style()
            } else if dragging_from == Some(index) {
                Style::default()
                    .fg(theme.dragging)
                    .add_modifier(Modifier::ITALIC)
            } else if selected {
                Style::default().fg(theme.selected)
            } else {
                Style::default().fg(theme.foreground)
            };

            TableRow::new(vec![
                Cell::from(mark),
                Cell::from(format!("{}", index + 1)),
                Cell::from(row.record.name.clone()),
                Cell::from(row.record.gender.clone()),
                Cell::from(row.record.email.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Percentage(35),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_range_empty() {
        assert_eq!(visible_range(0, 0, 10), (0, 0));
        assert_eq!(visible_range(3, 5, 0), (0, 0));
    }

    #[test]
    fn visible_range_fits() {
        assert_eq!(visible_range(2, 5, 10), (0, 5));
    }

    #[test]
    fn visible_range_follows_cursor() {
        assert_eq!(visible_range(9, 20, 5), (5, 10));
        assert_eq!(visible_range(19, 20, 5), (15, 20));
    }

    #[test]
    fn cursor_always_inside_window() {
        for cursor in 0..30 {
            let (start, end) = visible_range(cursor, 30, 7);
            assert!(start <= cursor && cursor < end, "cursor {}", cursor);
            assert!(end - start <= 7);
        }
    }
}
