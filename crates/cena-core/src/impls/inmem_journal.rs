//! InMemoryJournal - 開発用・テスト用の記録帳
//!
//! # 振る舞い
//! - day は日付ごとに 1 行（upsert）。同じ日付で再度記録すると、その日の
//!   全ての meal の activity が新しい値に変わる
//! - meal は追記のみ
//! - 履歴は作成の新しい順

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{
    ActivityClass, CarbLevel, CenaError, DayId, DinnerInput, HistoryRecord, MealEntry, MealId,
    ProteinLevel, Quality,
};
use crate::ports::{Clock, HistorySource, IdGenerator, SystemClock, UlidGenerator};

#[derive(Debug, Clone, Copy)]
struct DayRow {
    id: DayId,
    activity: ActivityClass,
}

#[derive(Debug, Clone, Copy)]
struct MealRow {
    id: MealId,
    date: NaiveDate,
    protein: ProteinLevel,
    carbs: CarbLevel,
    quality: Quality,
}

#[derive(Debug, Default)]
struct JournalState {
    days: HashMap<NaiveDate, DayRow>,
    /// 挿入順（古い順）
    meals: Vec<MealRow>,
}

impl JournalState {
    fn join(&self, meal: &MealRow) -> Option<MealEntry> {
        let day = self.days.get(&meal.date)?;
        Some(MealEntry {
            id: meal.id,
            date: meal.date,
            activity: day.activity,
            protein: meal.protein,
            carbs: meal.carbs,
            quality: meal.quality,
        })
    }
}

/// InMemoryJournal は HistorySource の in-memory 実装
///
/// # 使用例
/// ```ignore
/// let journal = InMemoryJournal::new();
/// let entry = journal.log_dinner(DinnerInput::new(Gym, High, WholeFood)).await;
/// let records = journal.load().await?;
/// ```
pub struct InMemoryJournal {
    state: Mutex<JournalState>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Clock を差し替えて作成（テスト用）
    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Clock + Clone + 'static,
    {
        Self {
            state: Mutex::new(JournalState::default()),
            clock: Arc::new(clock.clone()),
            ids: Arc::new(UlidGenerator::new(clock)),
        }
    }

    /// Log today's dinner.
    pub async fn log_dinner(&self, input: DinnerInput) -> MealEntry {
        let today = self.clock.today();
        self.log_dinner_on(today, input).await
    }

    /// Log a dinner for an explicit date.
    ///
    /// The day's activity class is overwritten with `input.activity`, which
    /// also relabels earlier meals of that date.
    pub async fn log_dinner_on(&self, date: NaiveDate, input: DinnerInput) -> MealEntry {
        let mut state = self.state.lock().await;

        let ids = &self.ids;
        let day = state.days.entry(date).or_insert_with(|| DayRow {
            id: ids.generate_day_id(),
            activity: input.activity,
        });
        day.activity = input.activity;
        let day_id = day.id;

        let meal = MealRow {
            id: self.ids.generate_meal_id(),
            date,
            protein: input.protein,
            carbs: input.carbs,
            quality: input.quality,
        };
        state.meals.push(meal);

        let entry = MealEntry {
            id: meal.id,
            date,
            activity: input.activity,
            protein: meal.protein,
            carbs: meal.carbs,
            quality: meal.quality,
        };
        info!(
            meal_id = %entry.id,
            day_id = %day_id,
            %date,
            activity = %entry.activity,
            verdict = %entry.verdict(),
            "logged dinner"
        );
        entry
    }

    /// All meals joined with their day, newest first.
    pub async fn entries(&self) -> Vec<MealEntry> {
        let state = self.state.lock().await;
        state
            .meals
            .iter()
            .rev()
            .filter_map(|meal| state.join(meal))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.meals.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistorySource for InMemoryJournal {
    async fn load(&self) -> Result<Vec<HistoryRecord>, CenaError> {
        Ok(self
            .entries()
            .await
            .iter()
            .map(MealEntry::record)
            .collect())
    }
}
