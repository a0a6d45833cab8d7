//! OpenAI chat completions client.

use crate::http::{build_client, endpoint, send_json};
use crate::prompt::{VISION_INSTRUCTION, VISION_SYSTEM};
use crate::provider::{CompletionModel, VisionModel};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use shotcraft_core::{Error, Result};
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "openai";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// Client for the OpenAI chat completions API.
///
/// One client serves both roles: with the vision model it describes images,
/// with the code model it completes prompts.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Create a client for `model`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        })
    }

    /// Model this client sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: Value) -> Result<String> {
        let url = endpoint(&self.api_base, "chat/completions");
        debug!(%url, model = %self.model, "Sending chat completion request");

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
        });
        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let response: ChatResponse = send_json(PROVIDER, request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::provider(PROVIDER, "Response contained no message content"))
    }
}

#[async_trait]
impl VisionModel for OpenAiClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn describe_image(&self, image: &[u8], media_type: &str) -> Result<String> {
        let data_url = format!("data:{media_type};base64,{}", STANDARD.encode(image));
        self.chat(json!([
            { "role": "system", "content": VISION_SYSTEM },
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": VISION_INSTRUCTION },
                    { "type": "image_url", "image_url": { "url": data_url } }
                ]
            }
        ]))
        .await
    }
}

#[async_trait]
impl CompletionModel for OpenAiClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.chat(json!([
            { "role": "system", "content": system },
            { "role": "user", "content": prompt }
        ]))
        .await
    }
}
