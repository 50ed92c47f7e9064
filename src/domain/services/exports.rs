#[cfg(test)]
#[path = "exports_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use chrono::DateTime;
use chrono::Local;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes generated code and conversation transcripts into the output
/// directory on demand.
pub struct Exports {
    pub output_dir: path::PathBuf,
}

impl Default for Exports {
    fn default() -> Exports {
        return Exports::new(path::PathBuf::from(Config::get(ConfigKey::OutputDir)));
    }
}

impl Exports {
    pub fn new(output_dir: path::PathBuf) -> Exports {
        return Exports { output_dir };
    }

    pub fn code_filename(language: Language, time: &DateTime<Local>) -> String {
        return format!(
            "code_{}.{}",
            time.format(TIMESTAMP_FORMAT),
            language.file_extension()
        );
    }

    pub fn conversation_filename(time: &DateTime<Local>) -> String {
        return format!("conversation_{}.txt", time.format(TIMESTAMP_FORMAT));
    }

    async fn write(&self, filename: &str, payload: &str) -> Result<path::PathBuf> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).await?;
        }

        let file_path = self.output_dir.join(filename);
        let mut file = fs::File::create(&file_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(path = ?file_path, "Saved file");
        return Ok(file_path);
    }

    pub async fn save_code(
        &self,
        code: &str,
        language: Language,
        time: &DateTime<Local>,
    ) -> Result<path::PathBuf> {
        if code.trim().is_empty() {
            bail!("No code to save!");
        }

        return self
            .write(&Exports::code_filename(language, time), code)
            .await;
    }

    pub async fn save_conversation(
        &self,
        transcript: &str,
        time: &DateTime<Local>,
    ) -> Result<path::PathBuf> {
        if transcript.trim().is_empty() {
            bail!("No conversation to save!");
        }

        return self
            .write(&Exports::conversation_filename(time), transcript)
            .await;
    }
}
