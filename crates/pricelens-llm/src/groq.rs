//! Groq chat completions client (OpenAI-compatible API).

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pricelens_core::{Completion, CompletionError};

/// Default Groq API base URL.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat model.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Groq chat completions client.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    /// Create a new Groq client with specified URL, key and model.
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        }
    }

    /// Model name this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single user message and return the first choice's text.
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.1,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Groq")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Groq API error ({}): {}", status, truncate(&body, 300));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            bail!("Groq returned an empty completion");
        }

        debug!(model = %self.model, chars = content.len(), "Groq completion received");
        Ok(content)
    }
}

#[async_trait]
impl Completion for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.chat(prompt)
            .await
            .map_err(|e| CompletionError::unavailable(format!("{:#}", e)))
    }

    fn name(&self) -> &str {
        "groq"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> GroqClient {
        let mut client = GroqClient::new(&server.url(), "gsk_test", "model-x");
        client.client = reqwest::Client::builder().no_proxy().build().unwrap();
        client
    }

    #[tokio::test]
    async fn test_chat_returns_first_choice() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .match_body(Matcher::Regex("\"model\":\"model-x\"".to_string()))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  {\"ok\":true}  "}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let out = client_for(&server).complete("analyze").await.unwrap();
        mock.assert_async().await;
        assert_eq!(out, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_http_error_is_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let err = client_for(&server).complete("analyze").await.unwrap_err();
        assert!(matches!(err, CompletionError::Unavailable(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server).chat("analyze").await.unwrap_err();
        assert!(err.to_string().contains("empty completion"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GroqClient::new("http://localhost:9/v1/", "k", "m");
        assert_eq!(client.base_url, "http://localhost:9/v1");
        assert_eq!(client.model(), "m");
    }
}
