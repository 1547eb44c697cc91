//! Daily report generation command.

use crate::adapters::FailoverGenerativeClient;
use crate::app::services::commentary_generator;
use crate::domain::{AppError, patch_report};
use crate::ports::ReportStore;

/// Summary of one completed generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Display date the page was patched with.
    pub date: String,
    /// Number of commentary fields written into the page.
    pub fields_patched: usize,
}

/// Run the full pipeline: load page, generate commentary, patch, save.
///
/// The page is loaded before the API call; it is saved only after every
/// section has been patched.
pub fn execute<S: ReportStore>(
    store: &S,
    client: &FailoverGenerativeClient,
    date_str: &str,
) -> Result<GenerateOutcome, AppError> {
    let html = store.load()?;

    let record = commentary_generator::generate_commentary(client, date_str)?;
    let patched = patch_report(&html, date_str, &record)?;

    store.save(&patched)?;

    Ok(GenerateOutcome {
        date: date_str.to_string(),
        fields_patched: crate::domain::REQUIRED_FIELDS.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::domain::REQUIRED_FIELDS;
    use crate::ports::GenerativeClient;

    use super::*;

    struct MemoryStore {
        html: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn with_page(html: &str) -> Self {
            Self { html: RefCell::new(Some(html.to_string())) }
        }

        fn empty() -> Self {
            Self { html: RefCell::new(None) }
        }

        fn page(&self) -> Option<String> {
            self.html.borrow().clone()
        }
    }

    impl ReportStore for MemoryStore {
        fn load(&self) -> Result<String, AppError> {
            self.html
                .borrow()
                .clone()
                .ok_or_else(|| AppError::ReportFileNotFound("index.html".to_string()))
        }

        fn save(&self, html: &str) -> Result<(), AppError> {
            *self.html.borrow_mut() = Some(html.to_string());
            Ok(())
        }
    }

    struct CannedClient {
        body: String,
    }

    impl GenerativeClient for CannedClient {
        fn generate(&self, _model: &str, _prompt: &str) -> Result<String, AppError> {
            Ok(self.body.clone())
        }

        fn list_models(&self) -> Result<Vec<String>, AppError> {
            Ok(Vec::new())
        }
    }

    fn failover_with_body(body: String) -> FailoverGenerativeClient {
        FailoverGenerativeClient::new(
            Box::new(CannedClient { body }),
            vec!["gemini-1.5-flash-latest".to_string()],
        )
    }

    fn full_json() -> String {
        let mut object = serde_json::Map::new();
        for key in REQUIRED_FIELDS {
            object.insert(key.to_string(), serde_json::json!(format!("{key} 한줄")));
        }
        serde_json::Value::Object(object).to_string()
    }

    fn page() -> String {
        include_str!("../../../index.html").to_string()
    }

    #[test]
    fn pipeline_patches_and_saves_the_page() {
        let store = MemoryStore::with_page(&page());
        let client = failover_with_body(full_json());

        let outcome = execute(&store, &client, "2026-01-26").unwrap();
        assert_eq!(outcome.date, "2026-01-26");
        assert_eq!(outcome.fields_patched, 14);

        let saved = store.page().unwrap();
        assert!(saved.contains("마감 숏 리포트 (2026-01-26)"));
        assert!(saved.contains("코스피: kospi_driver 한줄"));
    }

    #[test]
    fn missing_page_fails_before_generation() {
        let store = MemoryStore::empty();
        let client = failover_with_body(full_json());

        let err = execute(&store, &client, "2026-01-26").unwrap_err();
        assert!(matches!(err, AppError::ReportFileNotFound(_)));
    }

    #[test]
    fn incomplete_record_leaves_page_untouched() {
        let original = page();
        let store = MemoryStore::with_page(&original);
        let client = failover_with_body(r#"{"kospi_driver": "한 줄"}"#.to_string());

        let err = execute(&store, &client, "2026-01-26").unwrap_err();
        assert!(matches!(err, AppError::MissingFields { .. }));
        assert_eq!(store.page().unwrap(), original);
    }

    #[test]
    fn missing_marker_leaves_page_untouched() {
        let broken = page().replace("fx-driver:begin", "fx-driver:gone");
        let store = MemoryStore::with_page(&broken);
        let client = failover_with_body(full_json());

        let err = execute(&store, &client, "2026-01-26").unwrap_err();
        match err {
            AppError::SectionNotFound { section } => assert_eq!(section, "FX"),
            other => panic!("unexpected error variant: {other}"),
        }
        assert_eq!(store.page().unwrap(), broken);
    }
}
