use serde::{Deserialize, Serialize};

use crate::domain::Verdict;

/// Number of records per verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub approaches: usize,
    pub maintains: usize,
    pub hinders: usize,
}

impl VerdictCounts {
    pub fn add(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Approaches => self.approaches += 1,
            Verdict::Maintains => self.maintains += 1,
            Verdict::Hinders => self.hinders += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.approaches + self.maintains + self.hinders
    }
}

/// Output of the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStats {
    /// `round(100 * approaches / total)`, 0 for an empty history.
    pub compliance_percentage: u8,

    /// Consecutive APPROACHES verdicts counted from the most recent date.
    pub current_streak: usize,

    pub counts: VerdictCounts,
}

impl ComplianceStats {
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}
