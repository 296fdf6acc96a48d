//! Runtime configuration.
//!
//! Environment-only: there is no config file. Unset variables fall back to
//! the defaults, unknown values are rejected.
//!
//! - `CENA_ROUNDING`: `half-up` (default) | `half-even`
//! - `CENA_LOCALE`: `es` (default) | `en`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CenaError;
use crate::stats::RoundingMode;

pub const ENV_ROUNDING: &str = "CENA_ROUNDING";
pub const ENV_LOCALE: &str = "CENA_LOCALE";

/// Language used for verdict labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Es => f.write_str("es"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(CenaError::InvalidConfig {
                key: "locale",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenaConfig {
    #[serde(default)]
    pub rounding: RoundingMode,

    #[serde(default)]
    pub locale: Locale,
}

impl CenaConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, CenaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CenaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_ROUNDING) {
            config.rounding = raw.parse().map_err(|_| CenaError::InvalidConfig {
                key: ENV_ROUNDING,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_LOCALE) {
            config.locale = raw.parse().map_err(|_| CenaError::InvalidConfig {
                key: ENV_LOCALE,
                value: raw.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
