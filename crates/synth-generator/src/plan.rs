//! Header resolution: configured column names to positional actions.

use std::collections::{BTreeMap, BTreeSet};
use synth_core::{ColumnAction, GenerationSpec};
use tracing::{debug, warn};

/// Map column names to their position in `header`.
///
/// Names are trimmed and matched exactly (case-sensitive) against the first
/// header cell with that name. Names missing from the header are dropped.
pub fn resolve_columns<'a, I>(header: &[String], names: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.trim();
            match header.iter().position(|column| column == name) {
                Some(index) => Some((name.to_string(), index)),
                None => {
                    debug!("Column '{}' not found in header, ignoring", name);
                    None
                }
            }
        })
        .collect()
}

/// Position-indexed actions for one run.
///
/// Built once against the source header, before any column is deleted, so
/// every action addresses its column by original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Value action per column index, at most one each
    actions: BTreeMap<usize, ColumnAction>,
    /// Column indices removed from the output
    deleted: BTreeSet<usize>,
}

impl ColumnPlan {
    /// Resolve every column selection of `spec` against `header`.
    ///
    /// When a column is configured with more than one value action the
    /// strongest one is kept:
    /// `ValueFromList > Randomize > GenerateUuid > Increment`.
    pub fn resolve(header: &[String], spec: &GenerationSpec) -> Self {
        let mut plan = Self::default();

        for (name, action) in spec.column_actions() {
            let Some((name, index)) = resolve_columns(header, [name]).pop() else {
                continue;
            };
            plan.insert(&name, index, action);
        }

        debug!(
            "Resolved {} column actions and {} deleted columns",
            plan.actions.len(),
            plan.deleted.len()
        );
        plan
    }

    fn insert(&mut self, name: &str, index: usize, action: ColumnAction) {
        if !action.transforms_value() {
            self.deleted.insert(index);
            return;
        }

        match self.actions.get(&index) {
            Some(existing) if existing.priority() <= action.priority() => {
                warn!(
                    "Column '{}' has both '{}' and '{}' configured; using '{}'",
                    name,
                    existing.label(),
                    action.label(),
                    existing.label()
                );
            }
            _ => {
                self.actions.insert(index, action);
            }
        }
    }

    /// The effective action for a column index, if any.
    pub fn action(&self, index: usize) -> Option<&ColumnAction> {
        self.actions.get(&index)
    }

    /// All `(index, action)` pairs in column order.
    pub fn actions(&self) -> impl Iterator<Item = (usize, &ColumnAction)> {
        self.actions.iter().map(|(index, action)| (*index, action))
    }

    pub fn deleted_columns(&self) -> &BTreeSet<usize> {
        &self.deleted
    }

    pub fn is_deleted(&self, index: usize) -> bool {
        self.deleted.contains(&index)
    }

    /// Whether generated rows differ from their template at all.
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}
