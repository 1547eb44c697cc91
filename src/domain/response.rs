//! Extraction of a JSON payload from raw model output.
//!
//! The model is instructed to return bare JSON, but real responses sometimes
//! arrive wrapped in a Markdown code fence or surrounded by prose. Parsing
//! tolerates both; anything beyond that is fatal for the run.

use crate::domain::AppError;

/// Strip a Markdown code-fence wrapper when the whole payload is fenced.
///
/// Handles ```` ```json ```` and bare ```` ``` ```` info strings. Input that
/// is not a single fenced block passes through unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();

    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json", "JSON", empty) up to the first newline.
    let Some(newline) = rest.find('\n') else {
        return text;
    };
    let Some(body) = rest[newline + 1..].trim_end().strip_suffix("```") else {
        return text;
    };

    body.trim()
}

/// Find the first balanced `{ ... }` object in free-form text.
///
/// Brace counting is string-aware so braces inside JSON string values (and
/// escaped quotes inside those strings) do not throw the balance off.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse model output into a JSON value.
///
/// Tries the fence-stripped text directly first, then falls back to the
/// first balanced embedded object. No further recovery is attempted.
pub fn parse_payload(raw: &str) -> Result<serde_json::Value, AppError> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(direct_err) => {
            if let Some(candidate) = extract_json_object(cleaned) {
                if let Ok(value) = serde_json::from_str(candidate) {
                    return Ok(value);
                }
            }
            Err(AppError::MalformedResponse(direct_err.to_string()))
        }
    }
}
