//! App - アプリケーション層
//!
//! ports と純粋なロジック（classifier, stats）を組み合わせて、
//! 外部の利用者（記録画面、履歴画面、統計画面）に提供する。
//!
//! # 主要コンポーネント
//! - **TrackerBuilder**: Tracker の構築とワイヤリング
//! - **Tracker**: preview / history / stats

pub mod builder;
pub mod tracker;

pub use self::builder::{BuildError, TrackerBuilder};
pub use self::tracker::{HistoryView, Tracker};
