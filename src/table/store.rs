//! View state store
//!
//! Single owner of the base collection and all interaction state. Every
//! mutation goes through a method here; the rendered view is derived on
//! demand as `sort(filter(base))` and is never stored.
//!
//! Rows are identified by a [`RowId`] assigned at ingestion. Selection is a
//! set of ids, and positional indices only appear at the boundary
//! (`toggle_select`, `selected_indices`), so a sort or filter change can
//! never make a selection point at the wrong record.

use super::export::{self, ExportRecord};
use super::filter::{self, FilterState};
use super::record::{Field, Record, Row, RowId};
use super::reorder::{self, MoveOutcome};
use super::sort::{self, SortState};
use crate::source::FetchOutcome;
use std::collections::{BTreeSet, HashSet};

/// Interactive table state
#[derive(Debug, Default)]
pub struct ViewState {
    /// Authoritative, manually orderable rows
    base: Vec<Row>,

    /// Next id handed out at ingestion
    next_id: u64,

    filter: FilterState,
    sort: SortState,

    /// Selected rows, by identity
    selection: HashSet<RowId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding `records`
    #[cfg(test)]
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut state = Self::new();
        state.replace_base_collection(records);
        state
    }

    // ─────────────────────────────────────────────────────────────
    // Ingestion
    // ─────────────────────────────────────────────────────────────

    /// Replace the base collection wholesale (fetch/refetch)
    ///
    /// Every record gets a fresh id and the selection is cleared. Filter and
    /// sort settings are kept.
    pub fn replace_base_collection(&mut self, records: Vec<Record>) {
        self.base = records
            .into_iter()
            .map(|record| {
                let id = RowId(self.next_id);
                self.next_id += 1;
                Row { id, record }
            })
            .collect();
        self.selection.clear();
    }

    /// Apply the result of a record source call
    ///
    /// A failed fetch degrades to an empty table; the failure is logged and
    /// never surfaces to the caller.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(records) => {
                tracing::info!("Loaded {} records", records.len());
                self.replace_base_collection(records);
            }
            FetchOutcome::Failed(err) => {
                tracing::warn!("Record source unavailable, showing empty table: {}", err);
                self.replace_base_collection(Vec::new());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Filter / sort
    // ─────────────────────────────────────────────────────────────

    /// Set the search text for one column
    pub fn set_filter(&mut self, field: Field, text: impl Into<String>) {
        self.filter.set(field, text);
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Header click: same key flips direction, new key sorts ascending
    pub fn set_sort(&mut self, key: Field) {
        self.sort.toggle(key);
    }

    /// Return to manual (base) order
    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    // ─────────────────────────────────────────────────────────────
    // Derived view
    // ─────────────────────────────────────────────────────────────

    /// Rows in display order: sort(filter(base))
    pub fn rendered(&self) -> Vec<&Row> {
        let filtered = filter::filter(&self.base, &self.filter);
        sort::sort(&filtered, &self.sort)
    }

    /// Base collection in manual order
    #[cfg(test)]
    pub fn base(&self) -> &[Row] {
        &self.base
    }

    /// Number of rows in the base collection
    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    fn base_position(&self, id: RowId) -> Option<usize> {
        self.base.iter().position(|row| row.id == id)
    }

    // ─────────────────────────────────────────────────────────────
    // Manual reorder
    // ─────────────────────────────────────────────────────────────

    /// Move a row within the base collection (base indices)
    ///
    /// `to == None` is a cancelled drop. The manual order persists underneath
    /// any filter or sort.
    pub fn move_row(&mut self, from: usize, to: Option<usize>) -> MoveOutcome {
        reorder::reorder_in_place(&mut self.base, from, to)
    }

    /// Move a row using positions in the rendered view
    ///
    /// The dragged row takes the base position of the row it was dropped on,
    /// so with no filter or sort active this is exactly `move_row`.
    pub fn move_rendered_row(&mut self, from: usize, to: Option<usize>) -> MoveOutcome {
        let Some(to) = to else {
            return MoveOutcome::Cancelled;
        };
        let (source, target) = {
            let rendered = self.rendered();
            match (rendered.get(from), rendered.get(to)) {
                (Some(source), Some(target)) => (source.id, target.id),
                _ => {
                    tracing::debug!(from, to, "Ignoring drop outside the rendered rows");
                    return MoveOutcome::OutOfRange;
                }
            }
        };
        match (self.base_position(source), self.base_position(target)) {
            (Some(from), Some(to)) => self.move_row(from, Some(to)),
            _ => MoveOutcome::OutOfRange,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────

    /// Toggle selection of the row at a rendered index
    ///
    /// Returns false (and changes nothing) when the index is not in the
    /// rendered view.
    pub fn toggle_select(&mut self, index: usize) -> bool {
        let Some(id) = self.rendered().get(index).map(|row| row.id) else {
            return false;
        };
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected rows mapped to positions in the current rendered view
    ///
    /// Selected rows hidden by the filter are omitted; they stay selected and
    /// reappear once the filter lets them through.
    pub fn selected_indices(&self) -> BTreeSet<usize> {
        self.rendered()
            .iter()
            .enumerate()
            .filter(|(_, row)| self.selection.contains(&row.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Total selected rows, including ones currently filtered out
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Whether the export affordance should be offered
    pub fn can_export(&self) -> bool {
        !self.selected_indices().is_empty()
    }

    /// Selected rows as flat records, in rendered order
    pub fn export_selection(&self) -> Vec<ExportRecord> {
        export::export_selection(&self.rendered(), &self.selected_indices())
    }
}
