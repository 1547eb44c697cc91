//! Builds the commentary prompt and turns model output into a record.

use minijinja::{Environment, context};

use crate::adapters::{FailoverGenerativeClient, prompt_assets};
use crate::domain::{AppError, CommentaryRecord, response};

const PROMPT_TEMPLATE: &str = "commentary_prompt.j2";

fn render_error(reason: impl ToString) -> AppError {
    AppError::PromptRender { template: PROMPT_TEMPLATE.to_string(), reason: reason.to_string() }
}

/// Render the commentary prompt for the given display date.
pub fn build_prompt(date_str: &str) -> Result<String, AppError> {
    let source = prompt_assets::prompt_template(PROMPT_TEMPLATE)
        .ok_or_else(|| render_error("embedded template missing"))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(PROMPT_TEMPLATE, source).map_err(render_error)?;

    let template = env.get_template(PROMPT_TEMPLATE).map_err(render_error)?;
    template.render(context! { date => date_str }).map_err(render_error)
}

/// Generate one day's commentary record.
///
/// Parse failures surface as-is: one brace-extraction fallback happens inside
/// `response::parse_payload`, and nothing retries beyond that.
pub fn generate_commentary(
    client: &FailoverGenerativeClient,
    date_str: &str,
) -> Result<CommentaryRecord, AppError> {
    let prompt = build_prompt(date_str)?;
    let raw = client.generate(&prompt)?;
    let payload = response::parse_payload(&raw)?;
    CommentaryRecord::from_value(payload)
}
