//! Compliance statistics over a dinner history.

pub mod aggregate;
pub mod report;
pub mod rounding;

pub use aggregate::{aggregate, aggregate_with};
pub use report::{ComplianceStats, VerdictCounts};
pub use rounding::RoundingMode;
