//! Sort stage: stable ordering by one column

use super::record::{Field, FieldAccess};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

/// Active sort column and direction (`key: None` = keep incoming order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<Field>,
    pub direction: Direction,
}

impl SortState {
    pub fn by(key: Field, direction: Direction) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header click semantics: same key flips direction, new key starts ascending
    pub fn toggle(&mut self, key: Field) {
        if self.key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            *self = Self::by(key, Direction::Ascending);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Compare two records on one column
fn compare<T: FieldAccess>(a: &T, b: &T, key: Field, direction: Direction) -> Ordering {
    let ord = a.field(key).cmp(b.field(key));
    match direction {
        Direction::Ascending => ord,
        Direction::Descending => ord.reverse(),
    }
}

/// Return a newly ordered copy of `records`
///
/// `slice::sort_by` is stable, and reversing the comparator keeps ties
/// equal, so records with equal keys keep their input order in both
/// directions.
pub fn sort<T: FieldAccess + Clone>(records: &[T], state: &SortState) -> Vec<T> {
    let mut out = records.to_vec();
    if let Some(key) = state.key {
        out.sort_by(|a, b| compare(a, b, key, state.direction));
    }
    out
}
