//! Filesystem-backed report page store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, REPORT_PATH};
use crate::ports::ReportStore;

/// Stores the report page as a UTF-8 file on disk.
#[derive(Debug, Clone)]
pub struct FilesystemReportStore {
    path: PathBuf,
}

impl FilesystemReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the fixed page location in the working directory.
    pub fn current() -> Self {
        Self::new(REPORT_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for FilesystemReportStore {
    fn load(&self) -> Result<String, AppError> {
        if !self.path.exists() {
            return Err(AppError::ReportFileNotFound(self.path.display().to_string()));
        }

        Ok(fs::read_to_string(&self.path)?)
    }

    fn save(&self, html: &str) -> Result<(), AppError> {
        fs::write(&self.path, html)?;
        Ok(())
    }
}
