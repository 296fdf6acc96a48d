//! TrackerBuilder - Tracker の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - HistorySource が無いまま build() するとエラー
//! - 設定は「明示した値 > config() で渡した値 > デフォルト」の順で決まる

use super::tracker::Tracker;
use crate::config::{CenaConfig, Locale};
use crate::ports::HistorySource;
use crate::stats::RoundingMode;

/// BuildError は Tracker 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no history source configured")]
    MissingSource,
}

/// # 使用例
/// ```ignore
/// let tracker = TrackerBuilder::new()
///     .source(journal)
///     .config(CenaConfig::from_env()?)
///     .locale(Locale::En)
///     .build()?;
/// ```
pub struct TrackerBuilder<S> {
    source: Option<S>,
    config: Option<CenaConfig>,
    rounding: Option<RoundingMode>,
    locale: Option<Locale>,
}

impl<S: HistorySource> TrackerBuilder<S> {
    pub fn new() -> Self {
        Self {
            source: None,
            config: None,
            rounding: None,
            locale: None,
        }
    }

    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(mut self, config: CenaConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = Some(rounding);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn build(self) -> Result<Tracker<S>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;

        let mut config = self.config.unwrap_or_default();
        if let Some(rounding) = self.rounding {
            config.rounding = rounding;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(Tracker::new(source, config))
    }
}

impl<S: HistorySource> Default for TrackerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
