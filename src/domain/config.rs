//! Runtime configuration resolved from the environment.

use url::Url;

use crate::domain::AppError;

/// Environment variable holding the Gemini API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional environment variable overriding the first model candidate.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Model identifiers tried in order until one accepts the request.
pub const DEFAULT_MODEL_CANDIDATES: [&str; 4] = [
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash",
    "gemini-1.5-pro-latest",
    "gemini-pro",
];

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiApiConfig {
    /// Base endpoint URL. Must end with a trailing slash so model paths
    /// resolve beneath it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !self.base_url.path().ends_with('/') {
            return Err(AppError::InvalidConfig(
                "base_url must end with a trailing slash".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    120
}

/// Map a bare model alias onto its pinned `-latest` variant.
///
/// Unknown names pass through unchanged.
pub fn normalize_model_name(name: &str) -> String {
    match name.trim() {
        "flash" | "gemini-1.5-flash" => "gemini-1.5-flash-latest".to_string(),
        "pro" | "gemini-1.5-pro" => "gemini-1.5-pro-latest".to_string(),
        other => other.to_string(),
    }
}

/// Assemble the ordered candidate list, prepending a normalized override.
pub fn model_candidates(override_model: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(name) = override_model {
        let normalized = normalize_model_name(name);
        if !normalized.is_empty() {
            candidates.push(normalized);
        }
    }

    for name in DEFAULT_MODEL_CANDIDATES {
        if !candidates.iter().any(|existing| existing == name) {
            candidates.push(name.to_string());
        }
    }

    candidates
}

/// Everything one run needs beyond the credential itself.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub api: GeminiApiConfig,
    pub model_candidates: Vec<String>,
}

impl RunConfig {
    /// Resolve configuration from the environment. The credential is read
    /// separately by the HTTP client so it never lands in this struct.
    pub fn from_env() -> Self {
        let override_model = std::env::var(MODEL_ENV).ok();
        Self {
            api: GeminiApiConfig::default(),
            model_candidates: model_candidates(override_model.as_deref()),
        }
    }
}
