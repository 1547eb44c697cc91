//! Model failover wrapper for generative client operations.
//!
//! The underlying client sends one request to one named model. This wrapper
//! owns the ordered candidate list and moves to the next candidate only when
//! the current one is rejected as unavailable; every other error aborts.

use crate::domain::AppError;
use crate::ports::GenerativeClient;

const MAX_LOG_ERROR_CHARS: usize = 512;

/// Generative client with an ordered list of model candidates.
pub struct FailoverGenerativeClient {
    inner: Box<dyn GenerativeClient>,
    candidates: Vec<String>,
}

impl FailoverGenerativeClient {
    pub fn new(inner: Box<dyn GenerativeClient>, candidates: Vec<String>) -> Self {
        Self { inner, candidates }
    }

    /// The current candidate list, in try order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Drop candidates the API does not advertise.
    ///
    /// Best-effort enrichment: a listing failure, or an intersection that
    /// would leave no candidates at all, keeps the configured list unchanged.
    pub fn filter_candidates(&mut self) {
        match self.inner.list_models() {
            Ok(available) => {
                let filtered: Vec<String> = self
                    .candidates
                    .iter()
                    .filter(|candidate| available.iter().any(|name| name == *candidate))
                    .cloned()
                    .collect();

                if filtered.is_empty() {
                    eprintln!(
                        "Model listing had no overlap with configured candidates; keeping the configured list."
                    );
                } else {
                    self.candidates = filtered;
                }
            }
            Err(error) => {
                eprintln!(
                    "Model listing failed ({}); keeping the configured candidates.",
                    format_error_for_log(&error)
                );
            }
        }
    }

    /// Generate with the first candidate the API accepts.
    pub fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let mut last_error: Option<AppError> = None;

        for model in &self.candidates {
            match self.inner.generate(model, prompt) {
                Ok(text) => return Ok(text),
                Err(error) if is_model_unavailable(&error) => {
                    eprintln!(
                        "Model '{}' unavailable: {}. Trying next candidate.",
                        model,
                        format_error_for_log(&error)
                    );
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(AppError::ModelCandidatesExhausted {
            tried: self.candidates.clone(),
            last_error: last_error
                .map(|error| error.to_string())
                .unwrap_or_else(|| "no model candidates configured".to_string()),
        })
    }
}

/// "Try the next candidate" errors: unknown or unsupported model names.
///
/// The API reports these as 404s; the message check covers gateways that
/// rewrap the status.
fn is_model_unavailable(error: &AppError) -> bool {
    match error {
        AppError::GeminiApi { message, status } => {
            if *status == Some(404) {
                return true;
            }

            let lower = message.to_ascii_lowercase();
            lower.contains("not found") || lower.contains("is not supported")
        }
        _ => false,
    }
}

fn format_error_for_log(error: &AppError) -> String {
    let text = error.to_string();
    if text.len() <= MAX_LOG_ERROR_CHARS {
        return text;
    }

    let mut cut = MAX_LOG_ERROR_CHARS;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &text[..cut])
}
