pub mod gemini_client_http;
pub mod model_failover;
pub mod prompt_assets;
pub mod report_filesystem;

pub use gemini_client_http::HttpGenerativeClient;
pub use model_failover::FailoverGenerativeClient;
pub use report_filesystem::FilesystemReportStore;
