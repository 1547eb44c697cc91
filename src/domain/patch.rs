//! Applies one commentary record onto the report page.
//!
//! Every section is patched in memory first; callers only write the page
//! back once the whole plan has succeeded, so a missing marker leaves the
//! on-disk file untouched.

use crate::domain::report::{Region, ReportDocument};
use crate::domain::{AppError, CommentaryRecord};

/// Timestamp suffix shown next to the report date.
const DATE_SUFFIX: &str = " · KST 16:10";

/// Structural delimiters of the action-guide pill.
const PILL_OPEN: &str = r#"<div class="pill mono">"#;
const PILL_CLOSE: &str = "</div>";

/// Structural delimiters of the title date.
const TITLE_DATE_OPEN: &str = "마감 숏 리포트 (";
const TITLE_DATE_CLOSE: &str = ")";

/// One marker-delimited section of the patch plan.
struct MarkerSection {
    /// Human-readable name used in errors.
    label: &'static str,
    /// Marker comment name in the page.
    marker: &'static str,
    /// Static label kept in front of the value inside the region.
    prefix: &'static str,
    /// Record field written into the region.
    value: fn(&CommentaryRecord) -> &str,
}

const MARKER_SECTIONS: [MarkerSection; 13] = [
    MarkerSection {
        label: "KOSPI driver",
        marker: "kospi-driver",
        prefix: "코스피: ",
        value: |c| &c.kospi_driver,
    },
    MarkerSection {
        label: "KOSDAQ driver",
        marker: "kosdaq-driver",
        prefix: "코스닥: ",
        value: |c| &c.kosdaq_driver,
    },
    MarkerSection {
        label: "KOSPI flow",
        marker: "kospi-flow",
        prefix: "코스피: ",
        value: |c| &c.kospi_flow_comment,
    },
    MarkerSection {
        label: "KOSDAQ flow",
        marker: "kosdaq-flow",
        prefix: "코스닥: ",
        value: |c| &c.kosdaq_flow_comment,
    },
    MarkerSection { label: "FX", marker: "fx-driver", prefix: "", value: |c| &c.fx_driver },
    MarkerSection { label: "DXY check", marker: "dxy-driver", prefix: "", value: |c| &c.dxy_driver },
    MarkerSection {
        label: "US rate check",
        marker: "us-rate-driver",
        prefix: "",
        value: |c| &c.us_rate_driver,
    },
    MarkerSection {
        label: "flow check",
        marker: "flow-driver",
        prefix: "",
        value: |c| &c.flow_driver,
    },
    MarkerSection {
        label: "trade check",
        marker: "trade-driver",
        prefix: "",
        value: |c| &c.trade_driver,
    },
    MarkerSection {
        label: "overseas watch 1",
        marker: "overseas-watch-1",
        prefix: "",
        value: |c| &c.overseas1,
    },
    MarkerSection {
        label: "overseas watch 2",
        marker: "overseas-watch-2",
        prefix: "",
        value: |c| &c.overseas2,
    },
    MarkerSection {
        label: "domestic watch 1",
        marker: "domestic-watch-1",
        prefix: "",
        value: |c| &c.domestic1,
    },
    MarkerSection {
        label: "domestic watch 2",
        marker: "domestic-watch-2",
        prefix: "",
        value: |c| &c.domestic2,
    },
];

fn section_missing(label: &str) -> AppError {
    AppError::SectionNotFound { section: label.to_string() }
}

fn marker_region(doc: &ReportDocument, marker: &str, label: &str) -> Result<Region, AppError> {
    doc.marker_region(marker).ok_or_else(|| section_missing(label))
}

fn patch_title_date(doc: &mut ReportDocument, date_str: &str) -> Result<(), AppError> {
    let region = doc
        .delimited_region(TITLE_DATE_OPEN, TITLE_DATE_CLOSE)
        .ok_or_else(|| section_missing("title date"))?;
    doc.replace(region, date_str);
    Ok(())
}

fn patch_date_line(doc: &mut ReportDocument, date_str: &str) -> Result<(), AppError> {
    let region = marker_region(doc, "report-date", "report date")?;
    doc.replace(region, &format!("{date_str}{DATE_SUFFIX}"));
    Ok(())
}

fn patch_score_pill(doc: &mut ReportDocument, comment: &str) -> Result<(), AppError> {
    let region =
        doc.delimited_region(PILL_OPEN, PILL_CLOSE).ok_or_else(|| section_missing("action guide"))?;
    doc.replace(region, comment);
    Ok(())
}

/// Patch every commentary region, returning the fully updated page text.
///
/// Sections target disjoint regions, so the application order carries no
/// meaning beyond determinism. Applying the same record twice yields the
/// same document.
pub fn patch_report(
    html: &str,
    date_str: &str,
    record: &CommentaryRecord,
) -> Result<String, AppError> {
    let mut doc = ReportDocument::new(html.to_string());

    patch_title_date(&mut doc, date_str)?;
    patch_date_line(&mut doc, date_str)?;

    for section in &MARKER_SECTIONS {
        let region = marker_region(&doc, section.marker, section.label)?;
        let content = format!("{}{}", section.prefix, (section.value)(record));
        doc.replace(region, &content);
    }

    patch_score_pill(&mut doc, &record.score_comment)?;

    Ok(doc.into_html())
}
