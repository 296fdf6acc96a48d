//! Activity classification of a day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CenaError;

/// What kind of training day the dinner belongs to.
///
/// Only the active/inactive split drives classification; the concrete label is
/// kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityClass {
    #[serde(rename = "gym")]
    Gym,

    #[serde(rename = "voley", alias = "volleyball")]
    Volleyball,

    /// Two sessions on the same day.
    #[serde(rename = "doble", alias = "double-session")]
    DoubleSession,

    #[serde(rename = "descanso", alias = "rest")]
    Rest,
}

impl ActivityClass {
    pub const ALL: [ActivityClass; 4] = [
        ActivityClass::Gym,
        ActivityClass::Volleyball,
        ActivityClass::DoubleSession,
        ActivityClass::Rest,
    ];

    /// Gym, volleyball and double-session days are active; rest is not.
    pub fn is_active(self) -> bool {
        match self {
            ActivityClass::Gym | ActivityClass::Volleyball | ActivityClass::DoubleSession => true,
            ActivityClass::Rest => false,
        }
    }

    /// Wire token (the one the history feed stores).
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityClass::Gym => "gym",
            ActivityClass::Volleyball => "voley",
            ActivityClass::DoubleSession => "doble",
            ActivityClass::Rest => "descanso",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ActivityClass::Gym => "gym",
            ActivityClass::Volleyball => "volleyball",
            ActivityClass::DoubleSession => "double-session",
            ActivityClass::Rest => "rest",
        }
    }
}

impl fmt::Display for ActivityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityClass {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gym" => Ok(ActivityClass::Gym),
            "voley" | "volleyball" => Ok(ActivityClass::Volleyball),
            "doble" | "double-session" | "double_session" => Ok(ActivityClass::DoubleSession),
            "descanso" | "rest" => Ok(ActivityClass::Rest),
            _ => Err(CenaError::invalid_enum(
                "day_type",
                s,
                "gym, voley, doble, descanso",
            )),
        }
    }
}
