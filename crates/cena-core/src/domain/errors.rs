//! Errors - 境界で発生するエラー
//!
//! classify / aggregate 自体は失敗しない。エラーは外部データを型付きの
//! 列挙型に変換する境界（codec, config, HistorySource）でのみ発生する。

use thiserror::Error;

/// ErrorKind はエラーの運用分類
///
/// - InvalidInput: 外部データが不正（修正しない限り再試行しても無意味）
/// - Source: 履歴の取得に失敗（再試行で回復しうる）
/// - Config: 設定値が不正
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Source,
    Config,
}

#[derive(Debug, Error)]
pub enum CenaError {
    #[error("invalid enumeration value for {field}: '{value}' (expected one of: {expected})")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("malformed history document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("history source failed: {0}")]
    Source(String),

    #[error("invalid config {key}='{value}'")]
    InvalidConfig { key: &'static str, value: String },
}

impl CenaError {
    pub fn invalid_enum(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.to_string(),
            expected,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CenaError::InvalidEnumValue { .. } | CenaError::InvalidDate { .. } | CenaError::Decode(_) => {
                ErrorKind::InvalidInput
            }
            CenaError::Source(_) => ErrorKind::Source,
            CenaError::InvalidConfig { .. } => ErrorKind::Config,
        }
    }
}
