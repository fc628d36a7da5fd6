//! TaskStore port - ドキュメントストアとの境界
//!
//! TaskStore は以下を管理します：
//! - タスクの永続化（create / update / delete）
//! - ユーザー単位のスナップショット読み出し
//! - 変更の購読（常に最新スナップショットを配る）
//!
//! # 設計原則
//! - クエリエンジンはこの port から受け取ったスナップショットだけを見る
//!   （ストアの同期方式・永続化方式には依存しない）
//! - ID の一意性はストア側の責務

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{Task, TaskDraft, TaskError, TaskId, TaskPatch, UserId};

/// The seam to the external document store.
/// The bundled implementation is in-memory; this trait is where a real
/// backend would be swapped in.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Materialized snapshot of one user's tasks, newest first
    /// (`created_at` descending, the store's subscription order).
    async fn snapshot(&self, user: UserId) -> Result<Vec<Task>, TaskError>;

    /// Validate the draft and persist a new task for `user`.
    /// The store assigns the id and `created_at`; a new task starts
    /// incomplete.
    async fn create(&self, user: UserId, draft: TaskDraft) -> Result<TaskId, TaskError>;

    /// Apply a partial update. Present fields are validated first.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<(), TaskError>;

    /// Remove a task.
    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;

    /// Subscribe to one user's tasks. The receiver always holds the latest
    /// ordered snapshot; a fresh one is published after every mutation.
    async fn subscribe(&self, user: UserId) -> Result<watch::Receiver<Vec<Task>>, TaskError>;
}
