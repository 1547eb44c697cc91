//! Embedded prompt template assets.

use include_dir::{Dir, include_dir};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Read an embedded prompt template by file name.
pub fn prompt_template(name: &str) -> Option<&'static str> {
    PROMPTS_DIR.get_file(name).and_then(|file| file.contents_utf8())
}
