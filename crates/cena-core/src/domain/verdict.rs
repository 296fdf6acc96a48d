//! Verdict: the three-valued outcome of classifying a dinner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Locale;

/// Whether a dinner moves the person toward the goal.
///
/// Serialized as SCREAMING_SNAKE_CASE: APPROACHES / MAINTAINS / HINDERS.
/// Output only; it is recomputed from the record every time and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approaches,
    Maintains,
    Hinders,
}

impl Verdict {
    /// Does this verdict count toward compliance / the streak?
    pub fn is_compliant(self) -> bool {
        self == Verdict::Approaches
    }

    /// Display string for the given locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Es, Verdict::Approaches) => "ACERCA",
            (Locale::Es, Verdict::Maintains) => "MANTIENE",
            (Locale::Es, Verdict::Hinders) => "FRENA",
            (Locale::En, Verdict::Approaches) => "APPROACHES",
            (Locale::En, Verdict::Maintains) => "MAINTAINS",
            (Locale::En, Verdict::Hinders) => "HINDERS",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_serializes_as_required_names() {
        let s = serde_json::to_string(&Verdict::Approaches).unwrap();
        assert_eq!(s, "\"APPROACHES\"");

        let s = serde_json::to_string(&Verdict::Maintains).unwrap();
        assert_eq!(s, "\"MAINTAINS\"");

        let s = serde_json::to_string(&Verdict::Hinders).unwrap();
        assert_eq!(s, "\"HINDERS\"");
    }

    #[test]
    fn spanish_labels_match_the_app() {
        assert_eq!(Verdict::Approaches.label(Locale::Es), "ACERCA");
        assert_eq!(Verdict::Maintains.label(Locale::Es), "MANTIENE");
        assert_eq!(Verdict::Hinders.label(Locale::Es), "FRENA");
    }

    #[test]
    fn only_approaches_is_compliant() {
        assert!(Verdict::Approaches.is_compliant());
        assert!(!Verdict::Maintains.is_compliant());
        assert!(!Verdict::Hinders.is_compliant());
    }
}
