//! Classifier: (activity class, protein level, quality) -> Verdict.
//!
//! Pure and total. Every match below is exhaustive without wildcard arms, so
//! adding a variant to any of the enumerations is a compile error here rather
//! than a silently defaulted verdict.

use crate::domain::{ActivityClass, ProteinLevel, Quality, Verdict};

/// Classify one dinner.
///
/// Active days (gym, volleyball, double-session):
/// - low protein: HINDERS
/// - medium protein: MAINTAINS
/// - high protein with whole-food or mixed quality: APPROACHES
/// - high protein, processed: MAINTAINS
///
/// Rest days:
/// - high protein with whole-food quality (mixed is not enough): APPROACHES
/// - medium protein: MAINTAINS
/// - anything else: HINDERS
///
/// Rest days are stricter than active days about quality. That asymmetry is
/// intended.
pub fn classify(activity: ActivityClass, protein: ProteinLevel, quality: Quality) -> Verdict {
    if activity.is_active() {
        classify_active(protein, quality)
    } else {
        classify_rest(protein, quality)
    }
}

fn classify_active(protein: ProteinLevel, quality: Quality) -> Verdict {
    match (protein, quality) {
        (ProteinLevel::Low, _) => Verdict::Hinders,
        (ProteinLevel::Medium, _) => Verdict::Maintains,
        (ProteinLevel::High, Quality::WholeFood | Quality::Mixed) => Verdict::Approaches,
        (ProteinLevel::High, Quality::Processed) => Verdict::Maintains,
    }
}

fn classify_rest(protein: ProteinLevel, quality: Quality) -> Verdict {
    match (protein, quality) {
        (ProteinLevel::High, Quality::WholeFood) => Verdict::Approaches,
        (ProteinLevel::Medium, _) => Verdict::Maintains,
        (ProteinLevel::Low, _) | (ProteinLevel::High, Quality::Mixed | Quality::Processed) => {
            Verdict::Hinders
        }
    }
}
