//! Report page storage port.

use crate::domain::AppError;

/// Port for loading and saving the report page.
pub trait ReportStore {
    /// Read the full page text.
    fn load(&self) -> Result<String, AppError>;

    /// Overwrite the page with new text.
    ///
    /// Implementations replace the whole document; callers only invoke this
    /// after every patch step has succeeded.
    fn save(&self, html: &str) -> Result<(), AppError>;
}
