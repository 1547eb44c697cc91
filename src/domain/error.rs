use std::io;

use thiserror::Error;

/// Library-wide error type for magam operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is not set.
    #[error("Missing required environment variable '{0}'")]
    EnvironmentVariableMissing(String),

    /// Configuration value is invalid.
    #[error("{0}")]
    InvalidConfig(String),

    /// Gemini API request failed.
    #[error("Gemini API request failed: {message}")]
    GeminiApi { message: String, status: Option<u16> },

    /// Every model candidate was rejected as unavailable.
    #[error("No usable Gemini model among [{}]: {last_error}", .tried.join(", "))]
    ModelCandidatesExhausted { tried: Vec<String>, last_error: String },

    /// Prompt template failed to load or render.
    #[error("Failed to render prompt template '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// Model output could not be parsed into a commentary payload.
    #[error("Failed to parse commentary response: {0}")]
    MalformedResponse(String),

    /// Commentary payload parsed but required fields are absent.
    #[error("Commentary response missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<String> },

    /// Report page file does not exist at the expected path.
    #[error("Report page not found: {0}")]
    ReportFileNotFound(String),

    /// Expected marker or pattern for a report section is absent.
    #[error("Report section '{section}' not found in page")]
    SectionNotFound { section: String },
}
