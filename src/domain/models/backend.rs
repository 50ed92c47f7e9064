#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use super::Language;

pub struct BackendPrompt {
    pub text: String,
}

impl BackendPrompt {
    pub fn new(text: String) -> BackendPrompt {
        return BackendPrompt { text };
    }

    pub fn for_snippet(request: &str, language: Language) -> BackendPrompt {
        return BackendPrompt::new(format!(
            "Generate a {language} code snippet with explanation for the following request:\n\n{request}"
        ));
    }
}

#[async_trait]
pub trait Backend: Send + Sync {
    /// Requests a single completion for the prompt and returns the first
    /// choice's text, trimmed. No streaming, no retries.
    async fn get_completion(&self, prompt: BackendPrompt) -> Result<String>;
}

pub type BackendBox = Box<dyn Backend>;
