//! The report page held in memory during a patch run.
//!
//! The page is treated as opaque text with a small number of addressable
//! regions. Regions are located structurally (marker comment pairs or
//! literal delimiters), never with loose pattern substitution, so a patch
//! either lands exactly where intended or fails naming its section.

/// Relative path of the published report page.
pub const REPORT_PATH: &str = "index.html";

/// A replaceable span inside the document, exclusive of its delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// Mutable view of the report page.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    html: String,
}

impl ReportDocument {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Locate the span between `<!-- name:begin -->` and `<!-- name:end -->`.
    ///
    /// Returns `None` when either marker is absent or the end marker comes
    /// before the begin marker.
    pub fn marker_region(&self, name: &str) -> Option<Region> {
        let begin_tag = format!("<!-- {name}:begin -->");
        let end_tag = format!("<!-- {name}:end -->");

        let begin = self.html.find(&begin_tag)?;
        let start = begin + begin_tag.len();
        let end = self.html[start..].find(&end_tag)? + start;

        Some(Region { start, end })
    }

    /// Locate the interior of the first span delimited by `open` / `close`.
    pub fn delimited_region(&self, open: &str, close: &str) -> Option<Region> {
        let at = self.html.find(open)?;
        let start = at + open.len();
        let end = self.html[start..].find(close)? + start;

        Some(Region { start, end })
    }

    /// Replace a region's interior, leaving the delimiters in place.
    pub fn replace(&mut self, region: Region, content: &str) {
        self.html.replace_range(region.start..region.end, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_region_spans_interior_only() {
        let doc = ReportDocument::new(
            "<li><!-- fx-driver:begin -->이전 값<!-- fx-driver:end --></li>".to_string(),
        );
        let region = doc.marker_region("fx-driver").unwrap();
        assert_eq!(&doc.as_str()[region.start..region.end], "이전 값");
    }

    #[test]
    fn missing_end_marker_is_none() {
        let doc = ReportDocument::new("<!-- fx-driver:begin -->이전 값".to_string());
        assert!(doc.marker_region("fx-driver").is_none());
    }

    #[test]
    fn replace_keeps_markers() {
        let mut doc = ReportDocument::new(
            "<li><!-- fx-driver:begin -->이전<!-- fx-driver:end --></li>".to_string(),
        );
        let region = doc.marker_region("fx-driver").unwrap();
        doc.replace(region, "주요원인: 달러 강세");

        assert_eq!(
            doc.as_str(),
            "<li><!-- fx-driver:begin -->주요원인: 달러 강세<!-- fx-driver:end --></li>"
        );
        assert!(doc.marker_region("fx-driver").is_some());
    }

    #[test]
    fn delimited_region_matches_first_occurrence() {
        let doc = ReportDocument::new(
            r#"<div class="pill mono">첫번째</div><div class="pill mono">두번째</div>"#.to_string(),
        );
        let region = doc.delimited_region(r#"<div class="pill mono">"#, "</div>").unwrap();
        assert_eq!(&doc.as_str()[region.start..region.end], "첫번째");
    }
}
