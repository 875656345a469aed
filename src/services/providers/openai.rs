/// OpenAI chat completions provider
///
/// Speaks the `/v1/chat/completions` wire format, which most hosted LLM
/// vendors also accept, so pointing `OPENAI_API_URL` at a compatible gateway
/// works unchanged.
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{ChatMessage, CompletionProvider},
};

#[derive(Clone)]
pub struct OpenAiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiProvider {
    /// Creates a provider from application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.model_name.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let url = format!("{}/v1/chat/completions", self.api_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LlmApi(format!(
                "completion API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::LlmApi(format!("failed to parse completion API response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::LlmApi("completion API returned no choices".to_string()))?;

        tracing::debug!(
            model = %self.model,
            reply_chars = content.len(),
            provider = self.name(),
            "Completion received"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
