//! Task priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a task.
///
/// The derive order gives the total order `Low < Medium < High`, which is
/// the only ordering the sort stage of the query engine uses. Serialized as
/// the bare variant name ("High"), matching the stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, highest first (dropdown display order).
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Ordinal used as the sort key: Low=1, Medium=2, High=3.
    pub fn ordinal(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
