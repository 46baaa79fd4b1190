//! Near-duplicate task collapsing.
//!
//! Backends routinely emit the same commitment twice when it is repeated
//! in the transcript. Identity is the case-folded, trimmed
//! `(task, assignee)` pair; the first record per key wins.

use std::collections::HashSet;

use tracing::debug;

use crate::types::task::TaskList;

/// Collapse near-duplicate tasks, preserving first-seen order.
///
/// Empty input returns an empty list. Idempotent: deduping an already
/// deduped list is a no-op.
pub fn dedupe(list: TaskList) -> TaskList {
    let mut seen = HashSet::with_capacity(list.len());
    let before = list.len();

    let unique: Vec<_> = list
        .items
        .into_iter()
        .filter(|record| seen.insert(record.identity_key()))
        .collect();

    if unique.len() < before {
        debug!(before, after = unique.len(), "dropped duplicate tasks");
    }
    TaskList::new(unique)
}
