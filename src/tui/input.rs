// Key bindings
//
// Translates crossterm key events into table actions. Bindings depend on the
// input mode: while a filter box has focus, printable keys are text; while a
// row is being dragged, only navigation and drop/cancel apply.

use super::app::Mode;
use crate::table::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    ToggleSelect,
    ClearSelection,
    Sort(Field),
    ClearSort,
    EditFilter(Field),
    FilterInput(char),
    FilterBackspace,
    FilterDone,
    CycleGender,
    ClearFilters,
    Grab,
    Drop,
    CancelDrag,
    Export,
    CopyCsv,
    Refetch,
}

/// Map a key event to an action for the given mode
///
/// Only presses (and repeats) count; release events return `None`.
pub fn map_key(mode: Mode, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        Mode::EditFilter(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::FilterDone),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Char(c) => Some(Action::FilterInput(c)),
            _ => None,
        },
        Mode::Dragging { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Home => Some(Action::CursorTop),
            KeyCode::End => Some(Action::CursorBottom),
            KeyCode::Enter | KeyCode::Char('m') => Some(Action::Drop),
            KeyCode::Esc => Some(Action::CancelDrag),
            _ => None,
        },
        Mode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Home => Some(Action::CursorTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::CursorBottom),
            KeyCode::Char(' ') => Some(Action::ToggleSelect),
            KeyCode::Char('c') => Some(Action::ClearSelection),
            KeyCode::Char('1') => Some(Action::Sort(Field::Name)),
            KeyCode::Char('2') => Some(Action::Sort(Field::Gender)),
            KeyCode::Char('3') => Some(Action::Sort(Field::Email)),
            KeyCode::Char('0') => Some(Action::ClearSort),
            KeyCode::Char('/') => Some(Action::EditFilter(Field::Name)),
            KeyCode::Char('@') => Some(Action::EditFilter(Field::Email)),
            KeyCode::Char('g') => Some(Action::CycleGender),
            KeyCode::Char('F') => Some(Action::ClearFilters),
            KeyCode::Char('m') => Some(Action::Grab),
            KeyCode::Char('x') => Some(Action::Export),
            KeyCode::Char('y') => Some(Action::CopyCsv),
            KeyCode::Char('r') => Some(Action::Refetch),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browse_bindings() {
        assert_eq!(map_key(Mode::Browse, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            map_key(Mode::Browse, press(KeyCode::Char('2'))),
            Some(Action::Sort(Field::Gender))
        );
        assert_eq!(
            map_key(Mode::Browse, press(KeyCode::Char(' '))),
            Some(Action::ToggleSelect)
        );
        assert_eq!(map_key(Mode::Browse, press(KeyCode::Tab)), None);
    }

    #[test]
    fn filter_mode_treats_letters_as_text() {
        let mode = Mode::EditFilter(Field::Name);
        assert_eq!(
            map_key(mode, press(KeyCode::Char('q'))),
            Some(Action::FilterInput('q'))
        );
        assert_eq!(map_key(mode, press(KeyCode::Esc)), Some(Action::FilterDone));
    }

    #[test]
    fn drag_mode_bindings() {
        let mode = Mode::Dragging { from: 0 };
        assert_eq!(map_key(mode, press(KeyCode::Esc)), Some(Action::CancelDrag));
        assert_eq!(map_key(mode, press(KeyCode::Enter)), Some(Action::Drop));
        assert_eq!(map_key(mode, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn release_is_ignored_and_ctrl_c_quits() {
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(Mode::Browse, release), None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Mode::EditFilter(Field::Email), ctrl_c), Some(Action::Quit));
    }
}
