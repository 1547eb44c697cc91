//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, GeminiApiConfig};
use crate::ports::GenerativeClient;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini generative language API.
///
/// This client performs a single request per call. Model failover is
/// implemented by a dedicated wrapper adapter.
#[derive(Clone)]
pub struct HttpGenerativeClient {
    api_key: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGenerativeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerativeClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerativeClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GeminiApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, base_url: config.base_url.clone(), client })
    }

    /// Create from the environment variable with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&GeminiApiConfig::default())
    }

    /// Create from the environment variable with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(path).map_err(|e| AppError::GeminiApi {
            message: format!("Invalid API endpoint '{}': {}", path, e),
            status: None,
        })
    }

    fn error_from_response(status: reqwest::StatusCode, body_text: &str) -> AppError {
        let message = extract_error_message(body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.trim().to_string()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        AppError::GeminiApi { message, status: Some(status.as_u16()) }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(default)]
    name: String,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerativeClient for HttpGenerativeClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let url = self.endpoint(&format!("models/{}:generateContent", model))?;
        let request =
            GenerateRequest { contents: vec![Content { parts: vec![Part { text: prompt }] }] };

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::GeminiApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(Self::error_from_response(status, &body_text));
        }

        let api_response: GenerateResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::GeminiApi {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        let text: String = api_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content.parts.iter().map(|part| part.text.as_str()).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::GeminiApi {
                message: "No text in response".into(),
                status: Some(status.as_u16()),
            });
        }

        Ok(text)
    }

    fn list_models(&self) -> Result<Vec<String>, AppError> {
        let url = self.endpoint("models")?;

        let response = self
            .client
            .get(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .send()
            .map_err(|e| AppError::GeminiApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(Self::error_from_response(status, &body_text));
        }

        let api_response: ListModelsResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::GeminiApi {
                message: format!("Failed to parse model list: {}", e),
                status: Some(status.as_u16()),
            })?;

        Ok(api_response
            .models
            .into_iter()
            .map(|entry| entry.name.strip_prefix("models/").unwrap_or(&entry.name).to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }
}
