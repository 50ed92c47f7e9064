#[cfg(test)]
#[path = "openrouter_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<MessageRequest>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionMessageResponse {
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: CompletionMessageResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoiceResponse>,
}

/// OpenAI compatible chat completions endpoint, OpenRouter by default.
pub struct OpenRouter {
    url: String,
    token: String,
    model: String,
}

impl Default for OpenRouter {
    fn default() -> OpenRouter {
        return OpenRouter {
            url: Config::get(ConfigKey::ApiURL),
            token: Config::get(ConfigKey::ApiToken),
            model: Config::get(ConfigKey::Model),
        };
    }
}

#[async_trait]
impl Backend for OpenRouter {
    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: BackendPrompt) -> Result<String> {
        let req = CompletionRequest {
            model: self.model.to_string(),
            messages: vec![MessageRequest {
                role: "user".to_string(),
                content: prompt.text,
            }],
        };

        let url = format!("{url}/v1/chat/completions", url = self.url);
        let res = reqwest::Client::new()
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "Failed to make completion request"
            );
            bail!("{status} returned by {url}");
        }

        let body = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?body, "Completion response");

        if let Some(choice) = body.choices.first() {
            return Ok(choice.message.content.trim().to_string());
        }

        bail!("Completion response from {url} had no choices");
    }
}
