pub mod generative_client;
pub mod report_store;

pub use generative_client::GenerativeClient;
pub use report_store::ReportStore;
