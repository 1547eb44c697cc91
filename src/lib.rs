//! magam: Generate the daily Korean market-close short report page.
//!
//! One run asks the Gemini API for the day's commentary strings and patches
//! them into the marker regions of `index.html`, overwriting the page in
//! place. Intended to run once per day under a scheduled job.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use adapters::{FailoverGenerativeClient, FilesystemReportStore, HttpGenerativeClient};
use app::commands::generate;
use domain::RunConfig;

pub use app::commands::generate::GenerateOutcome;
pub use domain::AppError;

/// Run one report generation pass against `index.html` in the current directory.
pub fn generate() -> Result<GenerateOutcome, AppError> {
    let config = RunConfig::from_env();
    config.api.validate()?;

    let store = FilesystemReportStore::current();
    let http = HttpGenerativeClient::from_env_with_config(&config.api)?;
    let mut client = FailoverGenerativeClient::new(Box::new(http), config.model_candidates);
    client.filter_candidates();

    let date_str = domain::date::kst_today();
    let outcome = generate::execute(&store, &client, &date_str)?;

    println!("✅ Updated {} for {}", store.path().display(), outcome.date);
    Ok(outcome)
}
