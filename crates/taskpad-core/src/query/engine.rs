//! Task query engine: pure filter + sort over a task snapshot.
//!
//! Design:
//! - `evaluate` is a pure function of its inputs: no I/O, no logging, no
//!   mutation of the caller's slice. Each call starts from scratch; there is
//!   no caching or incremental update across snapshots.
//! - The four stages (text search, priority filter, completion filter, sort)
//!   are separate helpers composed in a fixed pipeline, so each one is
//!   testable on its own.
//! - The sort is stable in both directions: descending reverses the
//!   comparator result, never the sorted output, so tasks with equal keys
//!   keep their input order regardless of direction.

use std::cmp::Ordering;

use crate::domain::dates::parse_due_date;
use crate::domain::task::Task;

use super::filter::{FilterOptions, SortKey, SortOrder};

/// Evaluate one query against a snapshot of tasks.
///
/// Returns a newly allocated, ordered subset. The input snapshot is assumed
/// to be scoped to one user already; ownership is not re-checked here.
pub fn evaluate(tasks: &[Task], search_text: &str, options: &FilterOptions) -> Vec<Task> {
    let needle = search_text.trim().to_lowercase();

    let mut matched: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_search(task, &needle))
        .filter(|task| matches_priority(task, options))
        .filter(|task| options.completed.matches(task.completed))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep the post-filter order
    // (which itself derives from the input order).
    matched.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, options.sort_by);
        match options.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    matched
}

/// Text search stage: lowercase substring match over title OR description.
/// `needle` is already trimmed and lowercased; an empty needle passes all.
fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

/// Priority filter stage: exact match when set, no-op when `None`.
fn matches_priority(task: &Task, options: &FilterOptions) -> bool {
    match options.priority {
        Some(priority) => task.priority == priority,
        None => true,
    }
}

/// Raw (ascending) comparison for the selected sort key.
fn compare_by_key(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Priority => a.priority.ordinal().cmp(&b.priority.ordinal()),
        SortKey::DueDate => compare_due_dates(&a.due_date, &b.due_date),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Chronological order over raw due-date strings.
///
/// An unparsable date orders before every valid date (consistently, so the
/// ordering stays total); two unparsable dates compare equal and are left in
/// input order by the stable sort.
fn compare_due_dates(a: &str, b: &str) -> Ordering {
    match (parse_due_date(a), parse_due_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
