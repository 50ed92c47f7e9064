#[cfg(test)]
#[path = "completions_test.rs"]
mod tests;

use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::Language;

/// Every failed generation starts with this, followed by the failure detail.
pub const ERROR_PREFIX: &str = "Error: ";

pub struct Completions {}

impl Completions {
    /// Asks the backend for a snippet and always returns displayable text.
    /// Failures come back as `Error: ...` so the screen can show them in
    /// place of the code.
    pub async fn generate(backend: &dyn Backend, request: &str, language: Language) -> String {
        let prompt = BackendPrompt::for_snippet(request, language);
        tracing::debug!(language = language.to_string(), "Requesting completion");

        match backend.get_completion(prompt).await {
            Ok(text) => return text,
            Err(err) => {
                tracing::error!(error = ?err, "Completion request failed");
                return format!("{ERROR_PREFIX}{err:#}");
            }
        }
    }

    pub fn is_error(text: &str) -> bool {
        return text.starts_with(ERROR_PREFIX);
    }
}
