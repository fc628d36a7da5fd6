//! Calendar-date helpers for due dates.
//!
//! Due dates travel as raw ISO strings (see [`super::task::Task`]), so every
//! helper here parses first and degrades quietly when the string is not a
//! date. "Today" is always a caller-supplied [`NaiveDate`] rather than a
//! hidden clock read, so the predicates stay deterministic under test.

use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` parse. Anything else is `None`.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Human display form, e.g. "Wed, Jan 10, 2024".
/// Unparsable input is shown as-is rather than hidden.
pub fn format_for_display(s: &str) -> String {
    match parse_due_date(s) {
        Some(date) => date.format("%a, %b %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// Is the due date strictly before `today`?
pub fn is_overdue(due_date: &str, today: NaiveDate) -> bool {
    match parse_due_date(due_date) {
        Some(due) => due < today,
        None => false,
    }
}

/// Does the due date fall on `today`?
pub fn is_due_today(due_date: &str, today: NaiveDate) -> bool {
    parse_due_date(due_date) == Some(today)
}
