//! Best-effort JSON extraction from LLM responses.
//!
//! Models wrap JSON in markdown fences or chatter around it. The first
//! fenced block wins (with or without a `json` tag); otherwise everything
//! from the first `{` to the last `}` is taken. Whatever is extracted must
//! then parse; malformed JSON is a hard error, never auto-corrected.

use crate::error::DocumentError;
use crate::model::MockupDocument;
use winnow::ascii::multispace0;
use winnow::combinator::{opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::take_until;

const FENCE: &str = "```";

/// Locate the JSON payload inside a model response.
pub fn extract_json(response: &str) -> Result<&str, DocumentError> {
    let mut rest = response;
    if let Ok(body) = fenced_block.parse_next(&mut rest) {
        return Ok(body.trim());
    }

    match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&response[start..=end]),
        _ => Err(DocumentError::NoJson),
    }
}

/// Extract and parse a mockup document from a model response.
pub fn parse_mockup_response(response: &str) -> Result<MockupDocument, DocumentError> {
    let json = extract_json(response)?;
    let doc = MockupDocument::from_json(json)?;
    log::debug!(
        "parsed mockup {:?}: {} screens, {} flows",
        doc.app_name,
        doc.screens.len(),
        doc.flows.len()
    );
    Ok(doc)
}

/// The body of the first ```` ``` ```` / ```` ```json ```` fenced block.
fn fenced_block<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        (take_until(0.., FENCE), FENCE, opt("json"), multispace0),
        terminated(take_until(0.., FENCE), FENCE),
    )
    .parse_next(input)
}
