//! HistorySource port - 履歴レコードの供給元
//!
//! 保存方法・取得方法・ページングはこの crate の関心外。
//! aggregate を呼ぶ前に、対象となる全レコードを materialize して返す。

use async_trait::async_trait;

use crate::domain::{CenaError, HistoryRecord};

/// HistorySource は履歴を「作成の新しい順」で返す
///
/// # 設計原則
/// - 全件を Vec で返す（ストリーミングはしない）
/// - 日付順であることは要求しない（並べ替えは aggregate の責務）
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn load(&self) -> Result<Vec<HistoryRecord>, CenaError>;
}
