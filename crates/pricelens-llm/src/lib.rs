//! PriceLens completion backends.
//!
//! HTTP clients that implement `pricelens_core::Completion`:
//! - Groq chat completions (hosted, needs an API key)
//! - Ollama /api/generate (local)

pub mod groq;
pub mod ollama;

pub use groq::GroqClient;
pub use ollama::OllamaClient;

use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::info;

use pricelens_core::config::{LlmProvider, LlmSettings};
use pricelens_core::Completion;

/// Build the completion backend `settings` select, or `None` when the
/// model path is disabled.
pub fn build_completion(settings: &LlmSettings) -> Result<Option<Arc<dyn Completion>>> {
    let completion: Option<Arc<dyn Completion>> = match settings.provider {
        LlmProvider::Disabled => None,
        LlmProvider::Auto => settings.api_key.as_deref().map(|key| groq(settings, key)),
        LlmProvider::Groq => match settings.api_key.as_deref() {
            Some(key) => Some(groq(settings, key)),
            None => bail!("GROQ_API_KEY is not set"),
        },
        LlmProvider::Ollama => {
            let client = OllamaClient::new(
                settings.base_url.as_deref().unwrap_or(ollama::DEFAULT_OLLAMA_URL),
                settings.model.as_deref().unwrap_or(ollama::DEFAULT_OLLAMA_MODEL),
            );
            info!(model = client.model(), "Using Ollama completion backend");
            let client: Arc<dyn Completion> = Arc::new(client);
            Some(client)
        }
    };

    if completion.is_none() {
        info!("No completion backend configured, heuristic analysis only");
    }
    Ok(completion)
}

fn groq(settings: &LlmSettings, api_key: &str) -> Arc<dyn Completion> {
    let client = GroqClient::new(
        settings.base_url.as_deref().unwrap_or(groq::DEFAULT_GROQ_URL),
        api_key,
        settings.model.as_deref().unwrap_or(groq::DEFAULT_GROQ_MODEL),
    );
    info!(model = client.model(), "Using Groq completion backend");
    Arc::new(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(provider: LlmProvider, api_key: Option<&str>) -> LlmSettings {
        LlmSettings {
            provider,
            api_key: api_key.map(str::to_string),
            ..LlmSettings::default()
        }
    }

    #[test]
    fn test_auto_without_key_is_heuristic_only() {
        assert!(build_completion(&settings(LlmProvider::Auto, None)).unwrap().is_none());
    }

    #[test]
    fn test_auto_with_key_selects_groq() {
        let completion = build_completion(&settings(LlmProvider::Auto, Some("gsk")))
            .unwrap()
            .unwrap();
        assert_eq!(completion.name(), "groq");
    }

    #[test]
    fn test_disabled_ignores_key() {
        let completion = build_completion(&settings(LlmProvider::Disabled, Some("gsk"))).unwrap();
        assert!(completion.is_none());
    }

    #[test]
    fn test_groq_requires_key() {
        assert!(build_completion(&settings(LlmProvider::Groq, None)).is_err());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let completion = build_completion(&settings(LlmProvider::Ollama, None))
            .unwrap()
            .unwrap();
        assert_eq!(completion.name(), "ollama");
    }
}
