//! Calendar date for the report run.
//!
//! The report is a Korean market-close page, so "today" always means today
//! in Korea Standard Time regardless of where the job runs.

use chrono::{FixedOffset, Utc};

const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Today's date in KST, formatted `YYYY-MM-DD`.
pub fn kst_today() -> String {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset must be valid");
    Utc::now().with_timezone(&kst).format("%Y-%m-%d").to_string()
}
