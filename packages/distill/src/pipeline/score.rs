//! Deterministic completeness scoring for task lists.
//!
//! Point allocation per record, no partial credit within a category:
//! - 40pts: meaningful task description (3+ whitespace-separated words)
//! - 25pts: specific assignee (not the "Team" default)
//! - 20pts: actual due date (not "TBD")
//! - 15pts: valid priority value
//!
//! The list score is the arithmetic mean over all records, rounded to one
//! decimal place. An empty list scores 0.0 exactly.

use crate::types::task::{TaskList, TaskRecord, DEFAULT_ASSIGNEE, UNSET_DUE_DATE};

const TASK_DETAIL_POINTS: f64 = 40.0;
const ASSIGNEE_POINTS: f64 = 25.0;
const DUE_DATE_POINTS: f64 = 20.0;
const PRIORITY_POINTS: f64 = 15.0;

const MIN_TASK_WORDS: usize = 3;

/// Completeness score for one record, in [0, 100].
pub fn score_record(record: &TaskRecord) -> f64 {
    let mut points = 0.0;

    if record.task.split_whitespace().count() >= MIN_TASK_WORDS {
        points += TASK_DETAIL_POINTS;
    }
    if !record.assignee.is_empty() && record.assignee != DEFAULT_ASSIGNEE {
        points += ASSIGNEE_POINTS;
    }
    if !record.due_date.is_empty() && record.due_date != UNSET_DUE_DATE {
        points += DUE_DATE_POINTS;
    }
    // Priority is a typed enum: any record that parsed holds one of the
    // three valid literals, so the criterion is met by construction.
    points += PRIORITY_POINTS;

    points
}

/// Mean completeness score over a list, rounded to one decimal.
pub fn score(list: &TaskList) -> f64 {
    if list.is_empty() {
        return 0.0;
    }

    let total: f64 = list.items.iter().map(score_record).sum();
    round_one_decimal(total / list.len() as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
