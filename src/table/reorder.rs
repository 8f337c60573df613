//! Reorder stage: drag-style relocation of one element
//!
//! A move removes the element at `from` and re-inserts it at `to` in the
//! remaining (n-1)-length sequence. A cancelled drop (`to == None`) and an
//! out-of-range index are both no-ops rather than errors.

/// Outcome of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Element relocated
    Moved,
    /// `from == to`, nothing to do
    Unchanged,
    /// Drop was cancelled (no target)
    Cancelled,
    /// `from` or `to` outside the sequence
    OutOfRange,
}

impl MoveOutcome {
    pub fn is_moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// Move an element within `items` in place
pub fn reorder_in_place<T>(items: &mut Vec<T>, from: usize, to: Option<usize>) -> MoveOutcome {
    let Some(to) = to else {
        return MoveOutcome::Cancelled;
    };
    let len = items.len();
    if from >= len || to >= len {
        tracing::debug!(from, to, len, "Ignoring move outside the orderable range");
        return MoveOutcome::OutOfRange;
    }
    if from == to {
        return MoveOutcome::Unchanged;
    }

    let item = items.remove(from);
    items.insert(to, item);
    MoveOutcome::Moved
}

/// Return a reordered copy of `items`, leaving the input untouched
#[allow(dead_code)] // pure form of the move; the store mutates in place
pub fn reorder<T: Clone>(items: &[T], from: usize, to: Option<usize>) -> Vec<T> {
    let mut out = items.to_vec();
    reorder_in_place(&mut out, from, to);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn move_first_to_last() {
        let base = vec!["Alice", "bob", "Carl"];
        assert_eq!(reorder(&base, 0, Some(2)), vec!["bob", "Carl", "Alice"]);
    }

    #[test]
    fn move_last_to_first() {
        let base = vec!["a", "b", "c", "d"];
        assert_eq!(reorder(&base, 3, Some(0)), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn cancelled_drop_is_noop() {
        let mut base = vec![1, 2, 3];
        assert_eq!(reorder_in_place(&mut base, 1, None), MoveOutcome::Cancelled);
        assert_eq!(base, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut base = vec![1, 2, 3];
        assert_eq!(reorder_in_place(&mut base, 3, Some(0)), MoveOutcome::OutOfRange);
        assert_eq!(reorder_in_place(&mut base, 0, Some(3)), MoveOutcome::OutOfRange);
        assert_eq!(base, vec![1, 2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(reorder_in_place(&mut empty, 0, Some(0)), MoveOutcome::OutOfRange);
    }

    #[test]
    fn same_index_is_unchanged() {
        let mut base = vec![1, 2, 3];
        assert_eq!(reorder_in_place(&mut base, 1, Some(1)), MoveOutcome::Unchanged);
        assert_eq!(base, vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn same_index_never_changes(len in 1usize..20, seed in any::<usize>()) {
            let base: Vec<usize> = (0..len).collect();
            let i = seed % len;
            prop_assert_eq!(reorder(&base, i, Some(i)), base);
        }

        #[test]
        fn back_and_forth_restores(len in 2usize..20, a in any::<usize>(), b in any::<usize>()) {
            let base: Vec<usize> = (0..len).collect();
            let i = a % len;
            let j = b % len;
            let there = reorder(&base, i, Some(j));
            prop_assert_eq!(reorder(&there, j, Some(i)), base);
        }
    }
}
