//! InMemoryTaskStore - 開発・テスト用のタスクストア
//!
//! # 実装詳細
//! - HashMap<TaskId, Task> を tokio::sync::Mutex で排他制御
//! - ユーザーごとの watch チャンネルで最新スナップショットを配信
//! - Clock / IdGenerator は注入（テストでは FixedClock で固定できる）

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};

use crate::domain::{Task, TaskDraft, TaskError, TaskId, TaskPatch, UserId};
use crate::ports::{Clock, IdGenerator, SystemClock, TaskStore, UlidGenerator};

/// Locked store state (single source of truth for tasks and watchers).
struct StoreState {
    tasks: HashMap<TaskId, Task>,

    /// One watch channel per subscribed user; holds the latest snapshot.
    watchers: HashMap<UserId, watch::Sender<Vec<Task>>>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            watchers: HashMap::new(),
        }
    }

    /// Materialize one user's tasks, newest first.
    ///
    /// Ties on `created_at` are broken by id so snapshots are reproducible
    /// (HashMap iteration order is not).
    fn snapshot_for(&self, user: UserId) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .values()
            .filter(|task| task.user_id == user)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        tasks
    }

    /// Push a fresh snapshot to the user's watcher, if any.
    fn publish(&mut self, user: UserId) {
        if let Some(tx) = self.watchers.get(&user) {
            // send fails only when every receiver is gone; that just means
            // nobody is listening right now.
            let _ = tx.send(self.snapshot_for(user));
        }
    }
}

/// In-memory [`TaskStore`].
///
/// Design:
/// - Mirrors the observable behavior of the real document backend: snapshots
///   are user-scoped, ordered by creation time descending, and subscribers
///   are notified after every committed mutation.
/// - The store assigns ids and creation timestamps; form validation happens
///   here, before anything is written.
pub struct InMemoryTaskStore {
    state: Mutex<StoreState>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryTaskStore {
    /// Production wiring: system clock, ULID ids.
    pub fn new() -> Self {
        Self::with_parts(SystemClock, UlidGenerator::new(SystemClock))
    }

    /// Inject clock and id generation (テストで時刻と ID を固定するため).
    pub fn with_parts(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            state: Mutex::new(StoreState::new()),
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn snapshot(&self, user: UserId) -> Result<Vec<Task>, TaskError> {
        let state = self.state.lock().await;
        Ok(state.snapshot_for(user))
    }

    async fn create(&self, user: UserId, draft: TaskDraft) -> Result<TaskId, TaskError> {
        draft.validate()?;

        let id = self.ids.generate_task_id();
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            completed: false,
            user_id: user,
            created_at: self.clock.now(),
        };

        let mut state = self.state.lock().await;
        state.tasks.insert(id, task);
        state.publish(user);
        tracing::debug!(task_id = %id, user_id = %user, "task created");

        Ok(id)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<(), TaskError> {
        patch.validate()?;

        let mut state = self.state.lock().await;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskError::TaskNotFound(id))?;
        task.apply(patch);
        let user = task.user_id;
        state.publish(user);
        tracing::debug!(task_id = %id, "task updated");

        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let mut state = self.state.lock().await;
        let task = state.tasks.remove(&id).ok_or(TaskError::TaskNotFound(id))?;
        state.publish(task.user_id);
        tracing::debug!(task_id = %id, "task deleted");

        Ok(())
    }

    async fn subscribe(&self, user: UserId) -> Result<watch::Receiver<Vec<Task>>, TaskError> {
        let mut state = self.state.lock().await;
        let snapshot = state.snapshot_for(user);
        let tx = state
            .watchers
            .entry(user)
            .or_insert_with(|| watch::channel(snapshot).0);
        Ok(tx.subscribe())
    }
}
