//! Domain identifiers (strongly-typed IDs).
//!
//! # ULID ベースの ID + ジェネリック実装
//! ULID は先頭に timestamp を持つため、ミリ秒単位で生成順にソートできる。
//! 同一ミリ秒内の順序はランダム部分に依存するので、厳密な作成順が必要な
//! 箇所（journal の履歴）は挿入順を使う。
//!
//! ## Phantom Type パターン
//! `Id<T>` で共通実装を提供しつつ、`T` はコンパイル時だけのマーカー型。
//! MealId と DayId は混同できない。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
pub trait IdMarker: Send + Sync + 'static {
    /// Display で使うプレフィックス（例: "meal-", "day-"）
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// ULID から Id を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Meal のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Meal {}

impl IdMarker for Meal {
    fn prefix() -> &'static str {
        "meal-"
    }
}

/// Day のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {}

impl IdMarker for Day {
    fn prefix() -> &'static str {
        "day-"
    }
}

/// Identifier of one logged dinner.
pub type MealId = Id<Meal>;

/// Identifier of a calendar day row (one per date).
pub type DayId = Id<Day>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let ulid1 = Ulid::new();
        let ulid2 = Ulid::new();

        let meal = MealId::from_ulid(ulid1);
        let day = DayId::from_ulid(ulid2);

        assert_eq!(meal.as_ulid(), ulid1);
        assert_eq!(day.as_ulid(), ulid2);

        assert!(meal.to_string().starts_with("meal-"));
        assert!(day.to_string().starts_with("day-"));

        // let _: MealId = day; // <- does not compile
    }

    #[test]
    fn ids_sort_by_creation_time() {
        let earlier = MealId::from_ulid(Ulid::from_parts(1_000, 0));
        let later = MealId::from_ulid(Ulid::from_parts(2_000, 0));
        assert!(earlier < later);
    }

    #[test]
    fn ids_can_be_serialized() {
        let meal_id = MealId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&meal_id).unwrap();
        let deserialized: MealId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(meal_id, deserialized);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        assert_eq!(size_of::<MealId>(), size_of::<Ulid>());
        assert_eq!(size_of::<DayId>(), size_of::<Ulid>());
    }
}
