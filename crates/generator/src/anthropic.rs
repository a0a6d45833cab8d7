//! Anthropic messages API client.

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

const PROVIDER: &str = "anthropic";

/// API version sent with every request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Anthropic messages API.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
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

    async fn send(&self, system: &str, content: Value) -> Result<String> {
        let url = endpoint(&self.api_base, "messages");
        debug!(%url, model = %self.model, "Sending messages request");

        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system,
            "messages": [{ "role": "user", "content": content }],
        });
        let request = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        let response: MessagesResponse = send_json(PROVIDER, request).await?;
        response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| Error::provider(PROVIDER, "Response contained no text content"))
    }
}

#[async_trait]
impl VisionModel for AnthropicClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn describe_image(&self, image: &[u8], media_type: &str) -> Result<String> {
        self.send(
            VISION_SYSTEM,
            json!([
                { "type": "text", "text": VISION_INSTRUCTION },
                {
                    "type": "image",
                    "source": {
                        "type": "base64",
                        "media_type": media_type,
                        "data": STANDARD.encode(image)
                    }
                }
            ]),
        )
        .await
    }
}

#[async_trait]
impl CompletionModel for AnthropicClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.send(system, Value::String(prompt.to_string())).await
    }
}
