//! Aggregator: history -> compliance percentage + current streak.

use chrono::NaiveDate;
use tracing::debug;

use super::report::{ComplianceStats, VerdictCounts};
use super::rounding::RoundingMode;
use crate::domain::{HistoryRecord, Verdict};

/// Aggregate with the default (half-up) rounding.
pub fn aggregate(records: &[HistoryRecord]) -> ComplianceStats {
    aggregate_with(records, RoundingMode::default())
}

/// Aggregate a history.
///
/// 1. Empty history -> 0% and streak 0.
/// 2. Each record is classified on the fly.
/// 3. Percentage is APPROACHES / total, rounded with `rounding`.
/// 4. Records are re-sorted by date, newest first. The input is usually in
///    creation order, which is not date order, so the sort is never skipped.
/// 5. The streak counts APPROACHES from the newest date until the first other
///    verdict.
///
/// Records sharing a date each count on their own. The sort is stable, so
/// among same-date records the streak scan follows input order.
pub fn aggregate_with(records: &[HistoryRecord], rounding: RoundingMode) -> ComplianceStats {
    if records.is_empty() {
        return ComplianceStats::default();
    }

    let mut counts = VerdictCounts::default();
    let mut dated: Vec<(NaiveDate, Verdict)> = records
        .iter()
        .map(|record| {
            let verdict = record.verdict();
            counts.add(verdict);
            (record.date, verdict)
        })
        .collect();

    let compliance_percentage = rounding.percentage(counts.approaches, records.len());

    // Vec::sort_by is stable.
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    let current_streak = dated
        .iter()
        .take_while(|(_, verdict)| verdict.is_compliant())
        .count();

    debug!(
        total = records.len(),
        approaches = counts.approaches,
        compliance_percentage,
        current_streak,
        %rounding,
        "aggregated history"
    );

    ComplianceStats {
        compliance_percentage,
        current_streak,
        counts,
    }
}
