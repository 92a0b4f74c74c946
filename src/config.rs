use std::time::Duration;

use serde::Serialize;

use crate::models::LlmOverrides;
use crate::retry::RetryPolicy;

pub const DEMO_KEY: &str = "DEMO_KEY";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LLM_BASE: &str = "https://api.openai.com";
const DEFAULT_LLM_MODEL: &str = "gpt-4o";
const DEFAULT_IMAGE_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image";

/// Connection to an OpenAI-compatible chat completions API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSettings {
    pub api_key: String,
    /// Always ends in exactly one `/v1`.
    pub base_url: String,
    pub model: String,
}

impl LlmSettings {
    /// Applies request overrides field by field. Empty strings count as unset.
    pub fn merged_with(&self, overrides: Option<&LlmOverrides>) -> LlmSettings {
        let Some(o) = overrides else { return self.clone() };
        let pick = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        LlmSettings {
            api_key: pick(&o.api_key).unwrap_or_else(|| self.api_key.clone()),
            base_url: pick(&o.base_url).map(|u| normalize_base_url(&u)).unwrap_or_else(|| self.base_url.clone()),
            model: pick(&o.model).unwrap_or_else(|| self.model.clone()),
        }
    }

    pub fn display_base_url(&self) -> &str {
        self.base_url.strip_suffix("/v1").unwrap_or(&self.base_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ImageSettings {
    pub fn is_demo(&self) -> bool {
        self.api_key.is_empty() || self.api_key == DEMO_KEY
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub llm: LlmSettings,
    pub image: ImageSettings,
    pub retry: RetryPolicy,
}

/// What `GET /api/config` exposes. No secrets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub model: String,
    pub image_model: String,
    pub image_key_configured: bool,
}

/// Strips trailing slashes and any `/v1`, then appends `/v1` once.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let root = trimmed.strip_suffix("/v1").unwrap_or(trimmed);
    format!("{root}/v1")
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values take defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| get(key).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string());
        let num = |key: &str, default: u64| get(key).and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default);

        let defaults = RetryPolicy::default();
        AppConfig {
            port: get("PORT").and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_PORT),
            llm: LlmSettings {
                api_key: var("OPENAI_API_KEY", ""),
                base_url: normalize_base_url(&var("OPENAI_API_BASE", DEFAULT_LLM_BASE)),
                model: var("OPENAI_MODEL", DEFAULT_LLM_MODEL),
            },
            image: ImageSettings {
                api_key: var("GEMINI_API_KEY", DEMO_KEY),
                base_url: var("GEMINI_API_BASE", DEFAULT_IMAGE_BASE).trim_end_matches('/').to_string(),
                model: var("GEMINI_MODEL", DEFAULT_IMAGE_MODEL),
            },
            retry: RetryPolicy {
                max_retries: num("RETRY_MAX_RETRIES", u64::from(defaults.max_retries)) as u32,
                initial_delay: Duration::from_millis(num("RETRY_INITIAL_DELAY_MS", defaults.initial_delay.as_millis() as u64)),
                max_delay: Duration::from_millis(num("RETRY_MAX_DELAY_MS", defaults.max_delay.as_millis() as u64)),
            },
        }
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            base_url: self.llm.display_base_url().to_string(),
            model: self.llm.model.clone(),
            image_model: self.image.model.clone(),
            image_key_configured: !self.image.is_demo(),
        }
    }
}
