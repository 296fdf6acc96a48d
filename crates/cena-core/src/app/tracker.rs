//! Tracker - 利用者向けの表面

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::classify;
use crate::config::{CenaConfig, Locale};
use crate::domain::{ActivityClass, CenaError, HistoryRecord, ProteinLevel, Quality, Verdict};
use crate::ports::HistorySource;
use crate::stats::{ComplianceStats, aggregate_with};

/// A past record labelled with its verdict, recomputed at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryView {
    #[serde(flatten)]
    pub record: HistoryRecord,
    pub verdict: Verdict,
}

impl HistoryView {
    pub fn label(&self, locale: Locale) -> &'static str {
        self.verdict.label(locale)
    }
}

impl From<HistoryRecord> for HistoryView {
    fn from(record: HistoryRecord) -> Self {
        Self {
            verdict: record.verdict(),
            record,
        }
    }
}

/// Tracker は HistorySource と設定を束ねる
///
/// Stateless apart from the source: every call reloads and recomputes.
pub struct Tracker<S> {
    source: S,
    config: CenaConfig,
}

impl<S: HistorySource> Tracker<S> {
    pub fn new(source: S, config: CenaConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &CenaConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Verdict for a dinner that has not been saved yet.
    pub fn preview(
        &self,
        activity: ActivityClass,
        protein: ProteinLevel,
        quality: Quality,
    ) -> Verdict {
        classify(activity, protein, quality)
    }

    /// The history in source order (newest created first), each with its verdict.
    pub async fn history(&self) -> Result<Vec<HistoryView>, CenaError> {
        let records = self.source.load().await?;
        debug!(records = records.len(), "loaded history");
        Ok(records.into_iter().map(HistoryView::from).collect())
    }

    pub async fn stats(&self) -> Result<ComplianceStats, CenaError> {
        let records = self.source.load().await?;
        Ok(aggregate_with(&records, self.config.rounding))
    }
}
