//! History records: the unit the aggregator consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::ActivityClass;
use super::ids::MealId;
use super::meal::{CarbLevel, ProteinLevel, Quality};
use super::verdict::Verdict;
use crate::classifier::classify;

/// One logged dinner reduced to what the verdict depends on.
///
/// Immutable value. The verdict is derived on demand via [`HistoryRecord::verdict`]
/// so it can never drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub activity: ActivityClass,
    pub protein: ProteinLevel,
    pub quality: Quality,
}

impl HistoryRecord {
    pub fn new(
        date: NaiveDate,
        activity: ActivityClass,
        protein: ProteinLevel,
        quality: Quality,
    ) -> Self {
        Self {
            date,
            activity,
            protein,
            quality,
        }
    }

    pub fn verdict(&self) -> Verdict {
        classify(self.activity, self.protein, self.quality)
    }
}

/// A dinner as the user logs it, before it has an id or a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinnerInput {
    pub activity: ActivityClass,
    pub protein: ProteinLevel,
    #[serde(default)]
    pub carbs: CarbLevel,
    pub quality: Quality,
}

impl DinnerInput {
    pub fn new(activity: ActivityClass, protein: ProteinLevel, quality: Quality) -> Self {
        Self {
            activity,
            protein,
            carbs: CarbLevel::default(),
            quality,
        }
    }

    pub fn with_carbs(mut self, carbs: CarbLevel) -> Self {
        self.carbs = carbs;
        self
    }
}

/// A stored meal joined with its day.
///
/// `activity` is the day's current activity class, not a snapshot taken when
/// the meal was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: MealId,
    pub date: NaiveDate,
    pub activity: ActivityClass,
    pub protein: ProteinLevel,
    pub carbs: CarbLevel,
    pub quality: Quality,
}

impl MealEntry {
    pub fn record(&self) -> HistoryRecord {
        HistoryRecord::new(self.date, self.activity, self.protein, self.quality)
    }

    pub fn verdict(&self) -> Verdict {
        self.record().verdict()
    }
}
