//! Codec - 外部の履歴フィードを型付きレコードに変換する境界
//!
//! # デコードフロー
//! 1. serde_json で生の行（文字列のまま）にデシリアライズ
//! 2. 各トークンを FromStr で列挙型に変換（不正値は即エラー）
//! 3. 日付を YYYY-MM-DD として解析
//!
//! 入力の順序（作成の新しい順）はそのまま保持する。

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{
    ActivityClass, CarbLevel, CenaError, HistoryRecord, ProteinLevel, Quality,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the history feed, as the storage layer returns it.
///
/// ```json
/// { "id": 12, "protein_level": "alta", "carb_level": "medio", "quality": "real",
///   "day": { "date": "2024-01-03", "day_type": "gym" } }
/// ```
///
/// Unknown fields (`id`, `photo_url`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMealRow {
    pub protein_level: String,
    #[serde(default)]
    pub carb_level: Option<String>,
    pub quality: String,
    pub day: RawDay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    pub date: String,
    pub day_type: String,
}

impl RawMealRow {
    pub fn decode(&self) -> Result<HistoryRecord, CenaError> {
        let date = parse_date(&self.day.date)?;
        let activity: ActivityClass = decode_token(&self.day.day_type)?;
        let protein: ProteinLevel = decode_token(&self.protein_level)?;
        let quality: Quality = decode_token(&self.quality)?;
        // not part of the record, but a bad token still means a bad row
        if let Some(carbs) = &self.carb_level {
            decode_token::<CarbLevel>(carbs)?;
        }
        Ok(HistoryRecord::new(date, activity, protein, quality))
    }
}

/// Parse a single enumeration token.
pub fn decode_token<T>(raw: &str) -> Result<T, CenaError>
where
    T: FromStr<Err = CenaError>,
{
    raw.parse()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, CenaError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|source| CenaError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}

/// Decode a whole history document (a JSON array of rows).
///
/// Fails on the first bad row; nothing is skipped silently.
pub fn decode_history(json: &str) -> Result<Vec<HistoryRecord>, CenaError> {
    let rows: Vec<RawMealRow> = serde_json::from_str(json)?;
    decode_rows(&rows)
}

pub fn decode_rows(rows: &[RawMealRow]) -> Result<Vec<HistoryRecord>, CenaError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.decode().inspect_err(|e| {
                warn!(row = index, error = %e, "rejected history row");
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, Verdict};

    #[test]
    fn decodes_feed_rows_in_order() {
        let json = r#"
        [
          { "id": 3, "photo_url": "x", "protein_level": "baja", "carb_level": "alto",
            "quality": "procesado", "day": { "date": "2024-01-03", "day_type": "descanso" } },
          { "id": 2, "protein_level": "alta", "quality": "mixta",
            "day": { "date": "2024-01-02", "day_type": "voley" } }
        ]"#;

        let records = decode_history(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, parse_date("2024-01-03").unwrap());
        assert_eq!(records[0].verdict(), Verdict::Hinders);
        assert_eq!(records[1].activity, ActivityClass::Volleyball);
        assert_eq!(records[1].verdict(), Verdict::Approaches);
    }

    #[test]
    fn english_tokens_are_accepted() {
        let json = r#"[{ "protein_level": "high", "quality": "whole-food",
                         "day": { "date": "2024-05-01", "day_type": "rest" } }]"#;
        let records = decode_history(json).unwrap();
        assert_eq!(records[0].verdict(), Verdict::Approaches);
    }

    #[test]
    fn unknown_day_type_fails_fast() {
        let json = r#"[{ "protein_level": "alta", "quality": "real",
                         "day": { "date": "2024-01-01", "day_type": "yoga" } }]"#;
        let err = decode_history(json).unwrap_err();
        assert!(matches!(
            err,
            CenaError::InvalidEnumValue { field: "day_type", .. }
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn bad_carb_token_rejects_the_row() {
        let json = r#"[{ "protein_level": "alta", "carb_level": "mucho", "quality": "real",
                         "day": { "date": "2024-01-01", "day_type": "gym" } }]"#;
        let err = decode_history(json).unwrap_err();
        assert!(err.to_string().contains("carb_level"));
    }

    #[test]
    fn malformed_date_is_reported() {
        let err = parse_date("03/01/2024").unwrap_err();
        assert!(matches!(err, CenaError::InvalidDate { .. }));
        assert!(err.to_string().contains("03/01/2024"));
    }

    #[test]
    fn non_array_document_is_a_decode_error() {
        let err = decode_history(r#"{ "rows": [] }"#).unwrap_err();
        assert!(matches!(err, CenaError::Decode(_)));
    }

    #[test]
    fn empty_document_is_an_empty_history() {
        assert!(decode_history("[]").unwrap().is_empty());
    }
}
