//! Layered settings: defaults, then an optional TOML file, then
//! environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{PriceLensError, PriceLensResult};

/// Default settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pricelens.toml";

/// Default completion time box, in seconds.
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 20;

/// Longest completion time box accepted, in seconds.
pub const MAX_COMPLETION_TIMEOUT_SECS: u64 = 300;

/// Which completion backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Groq when an API key is present, otherwise no model.
    #[default]
    Auto,
    Groq,
    Ollama,
    #[serde(rename = "none")]
    Disabled,
}

impl LlmProvider {
    /// Parse from string.
    pub fn parse(s: &str) -> PriceLensResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "groq" => Ok(Self::Groq),
            "ollama" => Ok(Self::Ollama),
            "none" | "off" | "disabled" => Ok(Self::Disabled),
            other => Err(PriceLensError::config(format!(
                "unknown LLM provider '{}' (expected groq, ollama or none)",
                other
            ))),
        }
    }
}

/// Language model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Auto,
            api_key: None,
            model: None,
            base_url: None,
            timeout_secs: DEFAULT_COMPLETION_TIMEOUT_SECS,
        }
    }
}

/// Fixture catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Simulated request latency in milliseconds.
    pub delay_ms: u64,
    /// Seed for placeholder generation.
    pub seed: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            seed: None,
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

/// All PriceLens settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub catalog: CatalogSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Load and validate settings. See [`Settings::resolve`].
    pub fn load(path: Option<&Path>) -> PriceLensResult<Self> {
        let settings = Self::resolve(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from `path` (or `PRICELENS_CONFIG`, or
    /// `pricelens.toml` if present) and apply environment overrides,
    /// without validating. Callers layering their own overrides on top
    /// must call [`Settings::validate`] afterwards.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn resolve(path: Option<&Path>) -> PriceLensResult<Self> {
        let explicit: Option<PathBuf> = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("PRICELENS_CONFIG").map(PathBuf::from));

        let mut settings = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Read a TOML settings file.
    pub fn from_file(path: &Path) -> PriceLensResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PriceLensError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded settings file");
        Self::from_toml_str(&content)
    }

    /// Parse TOML settings.
    pub fn from_toml_str(content: &str) -> PriceLensResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> PriceLensResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("PRICELENS_LLM_PROVIDER") {
            self.llm.provider = LlmProvider::parse(&provider)?;
        }
        if let Some(key) = lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = lookup("PRICELENS_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Some(url) = lookup("PRICELENS_LLM_URL") {
            self.llm.base_url = Some(url);
        }
        if let Some(secs) = lookup("PRICELENS_COMPLETION_TIMEOUT_SECS") {
            self.llm.timeout_secs = parse_number("PRICELENS_COMPLETION_TIMEOUT_SECS", &secs)?;
        }
        if let Some(ms) = lookup("PRICELENS_SCRAPE_DELAY_MS") {
            self.catalog.delay_ms = parse_number("PRICELENS_SCRAPE_DELAY_MS", &ms)?;
        }
        if let Some(seed) = lookup("PRICELENS_SEED") {
            self.catalog.seed = Some(parse_number("PRICELENS_SEED", &seed)?);
        }
        if let Some(host) = lookup("PRICELENS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PRICELENS_PORT") {
            self.server.port = parse_number("PRICELENS_PORT", &port)?;
        }
        Ok(())
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> PriceLensResult<()> {
        if self.llm.timeout_secs == 0 || self.llm.timeout_secs > MAX_COMPLETION_TIMEOUT_SECS {
            return Err(PriceLensError::config(format!(
                "completion timeout must be between 1 and {} seconds, got {}",
                MAX_COMPLETION_TIMEOUT_SECS, self.llm.timeout_secs
            )));
        }
        if self.llm.provider == LlmProvider::Groq && self.llm.api_key.is_none() {
            return Err(PriceLensError::config(
                "the groq provider needs GROQ_API_KEY or llm.api_key",
            ));
        }
        Ok(())
    }

    /// The completion time box.
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_secs)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> PriceLensResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PriceLensError::config(format!("{} must be a number, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.llm.provider, LlmProvider::Auto);
        assert_eq!(settings.llm.timeout_secs, DEFAULT_COMPLETION_TIMEOUT_SECS);
        assert_eq!(settings.catalog.delay_ms, 1000);
        assert_eq!(settings.server.port, 3030);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [llm]
            provider = "ollama"
            model = "llama3.1"

            [catalog]
            delay_ms = 0
            seed = 9
            "#,
        )
        .unwrap();

        assert_eq!(settings.llm.provider, LlmProvider::Ollama);
        assert_eq!(settings.llm.model.as_deref(), Some("llama3.1"));
        assert_eq!(settings.llm.timeout_secs, DEFAULT_COMPLETION_TIMEOUT_SECS);
        assert_eq!(settings.catalog.seed, Some(9));
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut settings = Settings::from_toml_str("[catalog]\ndelay_ms = 250\n").unwrap();
        let vars = env(&[
            ("PRICELENS_SCRAPE_DELAY_MS", "0"),
            ("GROQ_API_KEY", "gsk_test"),
            ("PRICELENS_PORT", "8080"),
        ]);
        settings.apply_overrides(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.catalog.delay_ms, 0);
        assert_eq!(settings.llm.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_bad_numeric_override_is_config_error() {
        let mut settings = Settings::default();
        let vars = env(&[("PRICELENS_COMPLETION_TIMEOUT_SECS", "soon")]);
        let err = settings.apply_overrides(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, PriceLensError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_timeout_out_of_range() {
        let mut settings = Settings::default();
        settings.llm.timeout_secs = 0;
        assert!(settings.validate().is_err());
        settings.llm.timeout_secs = MAX_COMPLETION_TIMEOUT_SECS + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_groq_without_key_is_rejected() {
        let mut settings = Settings::default();
        settings.llm.provider = LlmProvider::Groq;
        assert!(settings.validate().is_err());
        settings.llm.api_key = Some("gsk".to_string());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_disabling_provider_clears_missing_key_error() {
        let mut settings = Settings::default();
        let vars = env(&[("PRICELENS_LLM_PROVIDER", "groq")]);
        settings.apply_overrides(|k| vars.get(k).cloned()).unwrap();
        assert!(settings.validate().is_err());

        settings.llm.provider = LlmProvider::Disabled;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[server]\nport = 4040\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.server.port, 4040);
        assert!(Settings::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
