use std::path::PathBuf;

use async_trait::async_trait;
use cena_core::codec::decode_history;
use cena_core::domain::{CenaError, HistoryRecord};
use cena_core::ports::HistorySource;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// History feed stored as a JSON array, read from a file or stdin (`-`).
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    async fn read(&self) -> std::io::Result<String> {
        if self.is_stdin() {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        } else {
            tokio::fs::read_to_string(&self.path).await
        }
    }
}

#[async_trait]
impl HistorySource for JsonFileHistory {
    async fn load(&self) -> Result<Vec<HistoryRecord>, CenaError> {
        let json = self
            .read()
            .await
            .map_err(|e| CenaError::Source(format!("{}: {e}", self.path.display())))?;
        let records = decode_history(&json)?;
        debug!(path = %self.path.display(), records = records.len(), "read history file");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let source = JsonFileHistory::new("/nonexistent/cena/history.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CenaError::Source(_)));
    }

    #[tokio::test]
    async fn reads_a_feed_file() {
        let path = std::env::temp_dir().join(format!("cena-history-{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{ "protein_level": "media", "quality": "real",
                  "day": { "date": "2024-06-01", "day_type": "doble" } }]"#,
        )
        .await
        .unwrap();

        let records = JsonFileHistory::new(&path).load().await.unwrap();
        assert_eq!(records.len(), 1);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
