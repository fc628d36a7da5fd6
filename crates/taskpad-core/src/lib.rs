//! taskpad-core
//!
//! Core building blocks for the taskpad to-do client.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, priority, dates, errors）
//! - **query**: クエリエンジン（検索・フィルタ・安定ソートの純関数）
//! - **ports**: 抽象化レイヤー（TaskStore, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryTaskStore など開発用）
//!
//! クエリエンジンはストアから受け取ったスナップショットに対する
//! 純関数で、I/O もログも行いません。永続化・購読は ports::TaskStore の
//! 実装側の責務です。

pub mod domain;
pub mod impls;
pub mod ports;
pub mod query;
