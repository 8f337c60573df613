// TUI application state
//
// Wraps the view-state store with everything the terminal front end needs:
// cursor position, the current input mode (browse, filter editing, dragging),
// toast notifications and the fetch-in-flight flag. All key handling funnels
// through `App::apply`, which is plain state manipulation and is tested
// without a terminal.

use super::clipboard;
use super::components::Toast;
use super::input::Action;
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::source::FetchOutcome;
use crate::table::export;
use crate::table::{Field, ViewState};
use std::time::Instant;

/// Gender filter presets, cycled with `g`
const GENDER_PRESETS: [&str; 3] = ["", "male", "female"];

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate, sort, select
    #[default]
    Browse,
    /// Typing into one column's search box
    EditFilter(Field),
    /// A row has been picked up; the cursor marks the drop target
    Dragging { from: usize },
}

/// Side effects the event loop has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Refetch,
}

/// Main application state for the TUI
pub struct App {
    /// Table state (base rows, filter, sort, selection)
    pub view: ViewState,

    /// Cursor position in the rendered view
    pub cursor: usize,

    /// Current input mode
    pub mode: Mode,

    /// Whether a fetch is in flight
    pub loading: bool,

    /// Label of the record source, for the title bar
    pub source_label: String,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Where exports are written
    pub config: Config,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// UI colors
    pub theme: Theme,

    /// Animation frame counter, advanced on every tick
    pub animation_frame: usize,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer, source_label: String) -> Self {
        Self {
            view: ViewState::new(),
            cursor: 0,
            mode: Mode::default(),
            loading: true,
            source_label,
            toast: None,
            should_quit: false,
            log_buffer,
            config,
            start_time: Instant::now(),
            theme: Theme::default(),
            animation_frame: 0,
        }
    }

    /// Advance animations and expire the toast (called on every tick)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.expire_toast();
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Number of rows currently rendered
    pub fn visible_len(&self) -> usize {
        self.view.rendered().len()
    }

    /// Take in the result of a (re)fetch
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        self.loading = false;
        if let FetchOutcome::Failed(_) = &outcome {
            self.show_toast("✗ Could not load users");
        }
        self.view.apply_fetch(outcome);
        // A drag holds a rendered index that no longer exists; filter
        // editing carries on over the new rows.
        if let Mode::Dragging { .. } = self.mode {
            self.mode = Mode::Browse;
        }
        self.cursor = 0;
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once it has expired
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => self.should_quit = true,

            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                if self.cursor + 1 < self.visible_len() {
                    self.cursor += 1;
                }
            }
            Action::CursorTop => self.cursor = 0,
            Action::CursorBottom => self.cursor = self.visible_len().saturating_sub(1),

            Action::ToggleSelect => {
                self.view.toggle_select(self.cursor);
            }
            Action::ClearSelection => self.view.clear_selection(),

            Action::Sort(field) => self.view.set_sort(field),
            Action::ClearSort => self.view.clear_sort(),

            Action::EditFilter(field) => self.mode = Mode::EditFilter(field),
            Action::FilterInput(c) => {
                if let Mode::EditFilter(field) = self.mode {
                    let mut text = self.view.filter_state().get(field).to_string();
                    text.push(c);
                    self.view.set_filter(field, text);
                }
            }
            Action::FilterBackspace => {
                if let Mode::EditFilter(field) = self.mode {
                    let mut text = self.view.filter_state().get(field).to_string();
                    text.pop();
                    self.view.set_filter(field, text);
                }
            }
            Action::FilterDone => self.mode = Mode::Browse,
            Action::CycleGender => {
                let current = self.view.filter_state().get(Field::Gender);
                let next = GENDER_PRESETS
                    .iter()
                    .position(|p| p.eq_ignore_ascii_case(current))
                    .map_or(0, |i| (i + 1) % GENDER_PRESETS.len());
                self.view.set_filter(Field::Gender, GENDER_PRESETS[next]);
            }
            Action::ClearFilters => self.view.clear_filters(),

            Action::Grab => {
                if self.cursor < self.visible_len() {
                    self.mode = Mode::Dragging { from: self.cursor };
                }
            }
            Action::Drop => {
                if let Mode::Dragging { from } = self.mode {
                    self.drop_row(from, Some(self.cursor));
                }
            }
            Action::CancelDrag => {
                if let Mode::Dragging { from } = self.mode {
                    self.drop_row(from, None);
                    self.cursor = from;
                }
            }

            Action::Export => self.export_to_file(),
            Action::CopyCsv => self.copy_to_clipboard(),
            Action::Refetch => {
                self.loading = true;
                self.mode = Mode::Browse;
                return Effect::Refetch;
            }
        }

        self.clamp_cursor();
        Effect::None
    }

    fn drop_row(&mut self, from: usize, to: Option<usize>) {
        self.mode = Mode::Browse;
        let outcome = self.view.move_rendered_row(from, to);
        if outcome.is_moved() {
            if let Some(key) = self.view.sort_state().key {
                self.show_toast(format!(
                    "Moved; sorted by {} (0 shows manual order)",
                    key.header()
                ));
            }
        }
    }

    /// Export the selection to the configured file
    ///
    /// Does nothing while the rendered selection is empty.
    fn export_to_file(&mut self) {
        if !self.view.can_export() {
            return;
        }
        let records = self.view.export_selection();
        match export::export_to_file(&self.config.export_path, &records) {
            Ok(()) => self.show_toast(format!(
                "✓ Exported {} rows to {}",
                records.len(),
                self.config.export_path.display()
            )),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.show_toast("✗ Export failed");
            }
        }
    }

    fn copy_to_clipboard(&mut self) {
        if !self.view.can_export() {
            return;
        }
        let records = self.view.export_selection();
        match clipboard::copy_csv(&records) {
            Ok(()) => self.show_toast("✓ Copied CSV to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use crate::tui::input::map_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::table::sort::{Direction, SortState};
    use crate::table::Record;

    fn app() -> App {
        let mut app = App::new(Config::default(), LogBuffer::new(), "test".to_string());
        app.on_fetch(FetchOutcome::Loaded(vec![
            Record::new("Alice", "female", "a@x"),
            Record::new("bob", "male", "b@x"),
            Record::new("Carl", "male", "c@x"),
        ]));
        app
    }

    fn names(app: &App) -> Vec<String> {
        app.view
            .rendered()
            .iter()
            .map(|r| r.record.name.clone())
            .collect()
    }

    #[test]
    fn fetch_clears_loading() {
        let app = app();
        assert!(!app.loading);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn failed_fetch_shows_toast_and_empty_table() {
        let mut app = App::new(Config::default(), LogBuffer::new(), "test".to_string());
        app.on_fetch(FetchOutcome::Failed(SourceError::Status(500)));
        assert_eq!(app.visible_len(), 0);
        assert!(app.toast.is_some());
        assert!(!app.view.can_export());
    }

    #[test]
    fn typing_into_filter() {
        let mut app = app();
        app.apply(Action::EditFilter(Field::Name));
        app.apply(Action::FilterInput('A'));
        assert_eq!(names(&app), vec!["Alice", "Carl"]);
        app.apply(Action::FilterBackspace);
        assert_eq!(app.visible_len(), 3);
        app.apply(Action::FilterDone);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn cursor_clamps_when_view_shrinks() {
        let mut app = app();
        app.apply(Action::CursorBottom);
        assert_eq!(app.cursor, 2);
        app.apply(Action::EditFilter(Field::Email));
        app.apply(Action::FilterInput('a'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn gender_cycle() {
        let mut app = app();
        app.apply(Action::CycleGender);
        assert_eq!(app.view.filter_state().gender, "male");
        app.apply(Action::CycleGender);
        assert_eq!(app.view.filter_state().gender, "female");
        assert_eq!(names(&app), vec!["Alice"]);
        app.apply(Action::CycleGender);
        assert_eq!(app.view.filter_state().gender, "");
    }

    #[test]
    fn sort_keys_toggle() {
        let mut app = app();
        app.apply(Action::Sort(Field::Name));
        app.apply(Action::Sort(Field::Name));
        assert_eq!(
            app.view.sort_state(),
            SortState::by(Field::Name, Direction::Descending)
        );
        app.apply(Action::ClearSort);
        assert_eq!(app.view.sort_state().key, None);
    }

    #[test]
    fn drag_and_drop_moves_row() {
        let mut app = app();
        app.apply(Action::Grab);
        assert_eq!(app.mode, Mode::Dragging { from: 0 });
        app.apply(Action::CursorDown);
        app.apply(Action::CursorDown);
        app.apply(Action::Drop);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(names(&app), vec!["bob", "Carl", "Alice"]);
    }

    #[test]
    fn cancelled_drag_is_noop() {
        let mut app = app();
        app.apply(Action::Grab);
        app.apply(Action::CursorDown);
        app.apply(Action::CancelDrag);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.cursor, 0);
        assert_eq!(names(&app), vec!["Alice", "bob", "Carl"]);
    }

    #[test]
    fn export_is_ignored_without_selection() {
        let mut app = app();
        app.config.export_path = std::env::temp_dir().join("usertable-never-written.csv");
        let _ = std::fs::remove_file(&app.config.export_path);
        app.apply(Action::Export);
        assert!(app.toast.is_none());
        assert!(!app.config.export_path.exists());
    }

    #[test]
    fn export_writes_selected_rows() {
        let mut app = app();
        let path = std::env::temp_dir().join(format!("usertable-app-{}.csv", std::process::id()));
        app.config.export_path = path.clone();

        app.apply(Action::CursorDown);
        app.apply(Action::ToggleSelect);
        app.apply(Action::Export);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Name,Gender,Email\nbob,male,b@x\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn fetch_keeps_filter_editing() {
        let mut app = app();
        app.apply(Action::EditFilter(Field::Name));
        app.apply(Action::FilterInput('j'));
        app.on_fetch(FetchOutcome::Loaded(vec![Record::new("Jo", "female", "j@x")]));

        assert_eq!(app.mode, Mode::EditFilter(Field::Name));
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(app.mode, q), Some(Action::FilterInput('q')));
        assert!(!app.should_quit);
        assert_eq!(app.view.filter_state().name, "j");
        assert_eq!(app.visible_len(), 1);
    }

    #[test]
    fn fetch_ends_drag() {
        let mut app = app();
        app.apply(Action::Grab);
        app.on_fetch(FetchOutcome::Loaded(vec![Record::new("Jo", "female", "j@x")]));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn tick_advances_spinner() {
        let mut app = app();
        let before = app.spinner_char();
        app.tick();
        assert_ne!(app.spinner_char(), before);
    }

    #[test]
    fn refetch_requests_effect() {
        let mut app = app();
        assert_eq!(app.apply(Action::Refetch), Effect::Refetch);
        assert!(app.loading);
    }
}
