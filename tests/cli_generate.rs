//! Binary-level tests for the `magam` CLI.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn missing_credential_fails_before_any_work() {
    let ctx = TestContext::new();
    ctx.seed_report_page();

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn missing_credential_leaves_page_untouched() {
    let ctx = TestContext::new();
    let page = ctx.seed_report_page();
    let before = std::fs::read_to_string(&page).unwrap();

    ctx.cli().assert().failure();

    assert_eq!(std::fs::read_to_string(&page).unwrap(), before);
}

#[test]
fn help_describes_the_tool() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("market-close short report"));
}

#[test]
fn version_flag_works() {
    let ctx = TestContext::new();

    ctx.cli().arg("--version").assert().success();
}
