pub mod commentary;
pub mod config;
pub mod date;
pub mod error;
pub mod patch;
pub mod report;
pub mod response;

pub use commentary::{CommentaryRecord, REQUIRED_FIELDS};
pub use config::{API_KEY_ENV, GeminiApiConfig, MODEL_ENV, RunConfig};
pub use error::AppError;
pub use patch::patch_report;
pub use report::{REPORT_PATH, Region, ReportDocument};
