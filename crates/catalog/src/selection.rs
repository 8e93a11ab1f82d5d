//! Position-based selection over a product list.

/// Item at `index`, or `None` when the index is negative or past the end.
///
/// Out-of-range indices are a normal "nothing selected" state (e.g. `-1` after
/// a deselection), not an error.
pub fn select_by_index<T>(items: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_indices_select() {
        let items = ["rice", "eggs", "milk"];
        assert_eq!(select_by_index(&items, 0), Some(&"rice"));
        assert_eq!(select_by_index(&items, 2), Some(&"milk"));
    }

    #[test]
    fn out_of_range_indices_select_nothing() {
        let items = ["rice", "eggs", "milk"];
        assert_eq!(select_by_index(&items, -1), None);
        assert_eq!(select_by_index(&items, 3), None);
        assert_eq!(select_by_index(&items, i64::MIN), None);
        assert_eq!(select_by_index(&items, i64::MAX), None);
        assert_eq!(select_by_index::<&str>(&[], 0), None);
    }
}
