//! cena-core
//!
//! Dinner verdicts and compliance statistics.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（activity, meal, verdict, record, ids, errors）
//! - **classifier**: (activity, protein, quality) -> Verdict（純粋関数）
//! - **stats**: 履歴 -> 達成率 + 現在の連続記録（純粋関数）
//! - **codec**: 外部フィードのデコード境界
//! - **config**: 環境変数ベースの設定
//! - **ports**: 抽象化レイヤー（HistorySource, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryJournal）
//! - **app**: Tracker（preview / history / stats）

pub mod app;
pub mod classifier;
pub mod codec;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod stats;

pub use classifier::classify;
pub use config::{CenaConfig, Locale};
pub use domain::{ActivityClass, CenaError, HistoryRecord, ProteinLevel, Quality, Verdict};
pub use stats::{ComplianceStats, RoundingMode, aggregate, aggregate_with};
