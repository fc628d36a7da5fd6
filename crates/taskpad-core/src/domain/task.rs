//! Task record: the stored to-do item plus its form payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates;
use super::errors::TaskError;
use super::ids::{TaskId, UserId};
use super::priority::Priority;

/// One user-owned to-do record, exactly as the document store holds it.
///
/// Design:
/// - Field names serialize camelCase to match the stored documents.
/// - `due_date` stays the raw ISO calendar-date string ("2024-01-10") from
///   the store. It is validated at the form boundary, not here; the query
///   engine tolerates unparsable values (they sort before valid dates).
/// - `created_at` is assigned by the store at creation time and is only
///   used as a sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
    pub completed: bool,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Apply a partial update in place. Fields absent from the patch are
    /// left untouched; the patch is consumed.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// TaskDraft は作成・編集フォームの入力値
///
/// id / owner / created_at はストア側が採番するため、ここには含まれません。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl TaskDraft {
    /// Check the form rules before the store accepts the draft:
    /// trimmed title must be non-empty, due date must parse as YYYY-MM-DD.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if dates::parse_due_date(&self.due_date).is_none() {
            return Err(TaskError::InvalidDueDate(self.due_date.clone()));
        }
        Ok(())
    }
}

impl Default for TaskDraft {
    /// A fresh form: empty text, Medium priority, no date picked yet.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: String::new(),
        }
    }
}

/// Partial update of a task. `None` means "leave the field unchanged";
/// completion toggling is just a patch with only `completed` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that only flips the completion flag.
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    /// Present fields obey the same rules as a full draft.
    pub fn validate(&self) -> Result<(), TaskError> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(TaskError::EmptyTitle);
        }
        if let Some(due_date) = &self.due_date
            && dates::parse_due_date(due_date).is_none()
        {
            return Err(TaskError::InvalidDueDate(due_date.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ulid::Ulid;

    fn sample_task() -> Task {
        Task {
            id: TaskId::from_ulid(Ulid::new()),
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            priority: Priority::Low,
            due_date: "2024-01-10".to_string(),
            completed: false,
            user_id: UserId::from_ulid(Ulid::new()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn draft_with_blank_title_is_rejected() {
        let draft = TaskDraft {
            title: "   ".to_string(),
            due_date: "2024-01-10".to_string(),
            ..TaskDraft::default()
        };
        assert!(matches!(draft.validate(), Err(TaskError::EmptyTitle)));
    }

    #[test]
    fn draft_with_unparsable_due_date_is_rejected() {
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            due_date: "next tuesday".to_string(),
            ..TaskDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(TaskError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn valid_draft_passes() {
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            due_date: "2024-01-10".to_string(),
            ..TaskDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut task = sample_task();
        task.apply(TaskPatch {
            title: Some("Buy oat milk".to_string()),
            completed: Some(true),
            ..TaskPatch::default()
        });

        assert_eq!(task.title, "Buy oat milk");
        assert!(task.completed);
        // 触っていないフィールドはそのまま
        assert_eq!(task.description, "2 liters");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.due_date, "2024-01-10");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut task = sample_task();
        let before = task.clone();
        task.apply(TaskPatch::default());
        assert_eq!(task, before);
    }

    #[test]
    fn patch_validation_ignores_absent_fields() {
        assert!(TaskPatch::completed(true).validate().is_ok());

        let bad = TaskPatch {
            due_date: Some("not-a-date".to_string()),
            ..TaskPatch::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn task_serializes_camel_case() {
        let task = sample_task();
        let json = serde_json::to_value(&task).unwrap();

        // ドキュメントのフィールド名（dueDate, userId, createdAt）と一致
        assert!(json.get("dueDate").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("due_date").is_none());
    }
}
