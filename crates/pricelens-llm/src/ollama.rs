//! Ollama HTTP client for local text generation.
//!
//! Uses the Ollama API at /api/generate with streaming disabled.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pricelens_core::{Completion, CompletionError};

/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default generation model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";

/// Ollama generation client.
#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a new Ollama client with specified URL and model.
    pub fn new(base_url: &str, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        }
    }

    /// Model name this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text from a prompt.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Ollama. Is it running?")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if body.contains("model") && body.contains("not found") {
                bail!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    self.model,
                    self.model
                );
            }
            bail!("Ollama API error ({}): {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        let text = result.response.trim().to_string();
        if text.is_empty() {
            bail!("Ollama returned an empty response");
        }

        debug!(model = %self.model, chars = text.len(), "Ollama generation received");
        Ok(text)
    }
}

#[async_trait]
impl Completion for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.generate(prompt)
            .await
            .map_err(|e| CompletionError::unavailable(format!("{:#}", e)))
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> OllamaClient {
        let mut client = OllamaClient::new(&server.url(), "llama-test");
        client.client = reqwest::Client::builder().no_proxy().build().unwrap();
        client
    }

    #[tokio::test]
    async fn test_generate_disables_streaming() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::PartialJsonString(
                r#"{"model":"llama-test","stream":false}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"model":"llama-test","response":"{\"top_products\":[]}\n","done":true}"#)
            .expect(1)
            .create_async()
            .await;

        let out = client_for(&server).complete("prompt").await.unwrap();
        mock.assert_async().await;
        assert_eq!(out, "{\"top_products\":[]}");
    }

    #[tokio::test]
    async fn test_missing_model_is_reported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(404)
            .with_body(r#"{"error":"model 'llama-test' not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("ollama pull llama-test"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let client = OllamaClient::new("http://127.0.0.1:1", "llama-test");
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionError::Unavailable(_)));
    }
}
