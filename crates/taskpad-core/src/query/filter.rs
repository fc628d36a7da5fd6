//! Query parameters: filter and sort options for one evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::Priority;

/// CompletionFilter は完了状態のトライステートフィルタ
///
/// 「未完了のみ」と「フィルタなし」は別の契約であり、plain bool では
/// 表現できません（Any を false に潰すのがよくあるバグ）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    /// No constraint: tasks of both completion states pass.
    Any,
    /// Only completed tasks pass.
    Complete,
    /// Only incomplete tasks pass.
    Incomplete,
}

impl CompletionFilter {
    /// Does a task with this `completed` flag survive the filter?
    pub fn matches(self, completed: bool) -> bool {
        match self {
            CompletionFilter::Any => true,
            CompletionFilter::Complete => completed,
            CompletionFilter::Incomplete => !completed,
        }
    }
}

/// Sort key for the sort stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    DueDate,
    Priority,
    CreatedAt,
}

/// Sort direction. Serialized "asc"/"desc" like the client payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// FilterOptions は1回のクエリ評価を記述する値オブジェクト
///
/// すべてのフィールドが必須です。「フィルタなし」は省略ではなく
/// `None` / `Any` で明示します。評価中は不変（コピーして渡す）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub priority: Option<Priority>,
    pub completed: CompletionFilter,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterOptions {
    /// The dashboard's initial state: no constraints, due date ascending.
    fn default() -> Self {
        Self {
            priority: None,
            completed: CompletionFilter::Any,
            sort_by: SortKey::DueDate,
            sort_order: SortOrder::Ascending,
        }
    }
}
