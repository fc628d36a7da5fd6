//! Query - タスク一覧に対する検索・フィルタ・ソート
//!
//! 表示側はスナップショット（Vec<Task>）と検索文字列・FilterOptions を渡し、
//! [`evaluate`] が順序付きの新しい Vec を返します。副作用なし・状態なし。

mod engine;
mod filter;

pub use self::engine::evaluate;
pub use self::filter::{CompletionFilter, FilterOptions, SortKey, SortOrder};
