//! What was on the plate: protein, carbohydrates and food quality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CenaError;

/// Protein content of the dinner. Ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProteinLevel {
    #[serde(rename = "baja", alias = "low")]
    Low,

    #[serde(rename = "media", alias = "medium")]
    Medium,

    #[serde(rename = "alta", alias = "high")]
    High,
}

impl ProteinLevel {
    pub const ALL: [ProteinLevel; 3] = [ProteinLevel::Low, ProteinLevel::Medium, ProteinLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            ProteinLevel::Low => "baja",
            ProteinLevel::Medium => "media",
            ProteinLevel::High => "alta",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ProteinLevel::Low => "low",
            ProteinLevel::Medium => "medium",
            ProteinLevel::High => "high",
        }
    }
}

impl fmt::Display for ProteinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProteinLevel {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baja" | "low" => Ok(ProteinLevel::Low),
            "media" | "medium" => Ok(ProteinLevel::Medium),
            "alta" | "high" => Ok(ProteinLevel::High),
            _ => Err(CenaError::invalid_enum("protein_level", s, "baja, media, alta")),
        }
    }
}

/// Carbohydrate content. Recorded and shown, never used for the verdict.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CarbLevel {
    #[serde(rename = "bajo", alias = "low")]
    Low,

    #[default]
    #[serde(rename = "medio", alias = "medium")]
    Medium,

    #[serde(rename = "alto", alias = "high")]
    High,
}

impl CarbLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CarbLevel::Low => "bajo",
            CarbLevel::Medium => "medio",
            CarbLevel::High => "alto",
        }
    }
}

impl fmt::Display for CarbLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CarbLevel {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bajo" | "low" => Ok(CarbLevel::Low),
            "medio" | "medium" => Ok(CarbLevel::Medium),
            "alto" | "high" => Ok(CarbLevel::High),
            _ => Err(CenaError::invalid_enum("carb_level", s, "bajo, medio, alto")),
        }
    }
}

/// Qualitative judgment of the food.
///
/// There is no total order here: only "acceptable" vs not matters, and the
/// rest-day rule looks at `WholeFood` specifically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "real", alias = "whole-food")]
    WholeFood,

    #[serde(rename = "mixta", alias = "mixed")]
    Mixed,

    #[serde(rename = "procesado", alias = "processed")]
    Processed,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::WholeFood, Quality::Mixed, Quality::Processed];

    /// Whole-food and mixed count as acceptable quality.
    pub fn is_acceptable(self) -> bool {
        matches!(self, Quality::WholeFood | Quality::Mixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::WholeFood => "real",
            Quality::Mixed => "mixta",
            Quality::Processed => "procesado",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Quality::WholeFood => "whole-food",
            Quality::Mixed => "mixed",
            Quality::Processed => "processed",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real" | "whole-food" | "whole_food" => Ok(Quality::WholeFood),
            "mixta" | "mixed" => Ok(Quality::Mixed),
            "procesado" | "processed" => Ok(Quality::Processed),
            _ => Err(CenaError::invalid_enum("quality", s, "real, mixta, procesado")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protein_levels_are_ordered() {
        assert!(ProteinLevel::Low < ProteinLevel::Medium);
        assert!(ProteinLevel::Medium < ProteinLevel::High);
    }

    #[test]
    fn acceptable_quality_excludes_processed() {
        assert!(Quality::WholeFood.is_acceptable());
        assert!(Quality::Mixed.is_acceptable());
        assert!(!Quality::Processed.is_acceptable());
    }

    #[test]
    fn tokens_parse_in_both_languages() {
        assert_eq!("alta".parse::<ProteinLevel>().unwrap(), ProteinLevel::High);
        assert_eq!("HIGH".parse::<ProteinLevel>().unwrap(), ProteinLevel::High);
        assert_eq!("whole-food".parse::<Quality>().unwrap(), Quality::WholeFood);
        assert_eq!("mixta".parse::<Quality>().unwrap(), Quality::Mixed);
        assert_eq!("alto".parse::<CarbLevel>().unwrap(), CarbLevel::High);
    }

    #[test]
    fn unknown_tokens_name_the_field() {
        let err = "extra".parse::<ProteinLevel>().unwrap_err();
        assert!(err.to_string().contains("protein_level"));

        let err = "organic".parse::<Quality>().unwrap_err();
        assert!(err.to_string().contains("quality"));
    }

    #[test]
    fn quality_serializes_as_wire_token() {
        let s = serde_json::to_string(&Quality::Processed).unwrap();
        assert_eq!(s, "\"procesado\"");

        let back: Quality = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(back, Quality::Mixed);
    }
}
