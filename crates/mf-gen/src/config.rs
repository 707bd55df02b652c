//! Generation endpoint configuration.
//!
//! Defaults match the hosted NVIDIA NIM catalogue. The credential is never
//! serialized back out.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_MODEL: &str = "meta/llama-3.1-70b-instruct";

const ENV_API_KEY: &str = "NIM_API_KEY";
const ENV_MODEL: &str = "NIM_MODEL";
const ENV_ENDPOINT: &str = "NIM_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Base URL; `/chat/completions` is appended.
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

impl GenerationConfig {
    /// Defaults overridden by `NIM_API_KEY`, `NIM_MODEL` and `NIM_ENDPOINT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = present(ENV_API_KEY) {
            config.api_key = Some(key);
        }
        if let Some(model) = present(ENV_MODEL) {
            config.model = model;
        }
        if let Some(endpoint) = present(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        config
    }

    /// True when a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}
