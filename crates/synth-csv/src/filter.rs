//! Deletion filter: drop configured columns and suppress configured rows.

use std::collections::BTreeSet;
use synth_core::RowRange;
use synth_generator::ColumnPlan;

/// Removes deleted columns from every written row and decides which source
/// rows are suppressed.
#[derive(Debug, Clone, Default)]
pub struct DeletionFilter {
    columns: BTreeSet<usize>,
    rows: Option<RowRange>,
}

impl DeletionFilter {
    pub fn new(columns: BTreeSet<usize>, rows: Option<RowRange>) -> Self {
        Self { columns, rows }
    }

    /// Filter for the deleted columns of `plan` and the given row range.
    pub fn from_plan(plan: &ColumnPlan, rows: Option<RowRange>) -> Self {
        Self::new(plan.deleted_columns().clone(), rows)
    }

    /// Fields of `row` that survive column deletion, in order.
    pub fn project<'a>(&'a self, row: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        row.iter()
            .enumerate()
            .filter(|(index, _)| !self.columns.contains(index))
            .map(|(_, field)| field.as_str())
    }

    /// Whether the 1-based source row number is suppressed.
    pub fn suppresses(&self, row_number: u64) -> bool {
        self.rows.is_some_and(|range| range.contains(row_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_project_removes_columns() {
        let filter = DeletionFilter::new([1, 3].into_iter().collect(), None);
        let source = row(&["a", "b", "c", "d", "e"]);
        let fields: Vec<_> = filter.project(&source).collect();
        assert_eq!(fields, vec!["a", "c", "e"]);
        // Source row is untouched
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_project_ignores_out_of_range_indices() {
        let filter = DeletionFilter::new([9].into_iter().collect(), None);
        let source = row(&["a", "b"]);
        let fields: Vec<_> = filter.project(&source).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_suppresses_row_range() {
        let filter = DeletionFilter::new(BTreeSet::new(), Some(RowRange::new(2, 3).unwrap()));
        assert!(!filter.suppresses(1));
        assert!(filter.suppresses(2));
        assert!(filter.suppresses(3));
        assert!(!filter.suppresses(4));
    }

    #[test]
    fn test_default_keeps_everything() {
        let filter = DeletionFilter::default();
        assert!(!filter.suppresses(1));
        assert_eq!(filter.project(&row(&["x"])).count(), 1);
    }
}
