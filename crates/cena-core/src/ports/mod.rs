//! Ports - 抽象化レイヤー
//!
//! 外部の協調者（ストレージ、時刻、ID 生成）へのインターフェース。
//! 分類と集計のロジックはここに依存しない。

pub mod clock;
pub mod history_source;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::history_source::HistorySource;
pub use self::id_generator::{IdGenerator, UlidGenerator};
