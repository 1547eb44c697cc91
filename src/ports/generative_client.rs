//! Generative text API port definition.

use crate::domain::AppError;

/// Port for text-generation operations.
pub trait GenerativeClient {
    /// Generate text from a prompt using the named model.
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;

    /// List model identifiers available to this credential.
    ///
    /// Used to pre-filter failover candidates. Callers treat a failure here
    /// as "no filtering" rather than aborting the run.
    fn list_models(&self) -> Result<Vec<String>, AppError>;
}
