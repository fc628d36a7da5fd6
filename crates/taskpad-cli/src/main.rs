use tracing_subscriber::EnvFilter;

use taskpad_core::domain::{Priority, Task, TaskDraft, TaskPatch, dates};
use taskpad_core::impls::InMemoryTaskStore;
use taskpad_core::ports::{Clock, IdGenerator, SystemClock, TaskStore, UlidGenerator};
use taskpad_core::query::{CompletionFilter, FilterOptions, SortKey, SortOrder, evaluate};

fn draft(title: &str, description: &str, priority: Priority, due_date: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        due_date: due_date.to_string(),
    }
}

fn print_tasks(label: &str, tasks: &[Task]) {
    let today = SystemClock.today();
    println!("== {label} ({} tasks)", tasks.len());
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        let due = dates::format_for_display(&task.due_date);
        let overdue = if dates::is_overdue(&task.due_date, today) {
            "  (overdue)"
        } else if dates::is_due_today(&task.due_date, today) {
            "  (due today)"
        } else {
            ""
        };
        println!(
            "  [{mark}] {:<10} {:<8} due {due}{overdue}",
            task.title, task.priority
        );
    }
    println!();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // (A) ストアとユーザーを用意
    let store = InMemoryTaskStore::new();
    let user = UlidGenerator::new(SystemClock).generate_user_id();

    // (B) タスクを投入（1件は完了にしておく）
    store
        .create(user, draft("Buy milk", "2 liters, oat", Priority::Low, "2024-01-10"))
        .await
        .expect("create");
    store
        .create(user, draft("Pay rent", "before the 5th", Priority::High, "2024-01-05"))
        .await
        .expect("create");
    let walk_dog = store
        .create(user, draft("Walk dog", "around the park", Priority::Medium, "2024-01-08"))
        .await
        .expect("create");
    store
        .update(walk_dog, TaskPatch::completed(true))
        .await
        .expect("update");

    // (C) 購読して最新スナップショットを取得
    let rx = store.subscribe(user).await.expect("subscribe");
    let snapshot = rx.borrow().clone();
    print_tasks("snapshot (newest first)", &snapshot);

    // (D) クエリを評価して表示
    let incomplete_by_due = FilterOptions {
        completed: CompletionFilter::Incomplete,
        ..FilterOptions::default()
    };
    print_tasks(
        "incomplete, due date ascending",
        &evaluate(&snapshot, "", &incomplete_by_due),
    );

    let priority_desc = FilterOptions {
        sort_by: SortKey::Priority,
        sort_order: SortOrder::Descending,
        ..FilterOptions::default()
    };
    print_tasks(
        "search \"a\", priority descending",
        &evaluate(&snapshot, "a", &priority_desc),
    );

    println!(
        "filter options as the client sends them: {}",
        serde_json::to_string(&incomplete_by_due).expect("serialize")
    );
}
