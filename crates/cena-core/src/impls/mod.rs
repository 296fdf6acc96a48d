//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryJournal**: HistorySource の in-memory 実装
//!
//! 本番用のストレージ実装はこの crate の外に置く。

pub mod inmem_journal;

pub use self::inmem_journal::InMemoryJournal;
