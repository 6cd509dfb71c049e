use std::collections::HashMap;

use lexdraft_core::{DocumentRequest, LexdraftError};

use crate::registry::normalize;

/// Sentence every generated document must close with.
pub const DISCLOSURE: &str =
    "This document is AI-generated and must be reviewed by a qualified attorney.";

/// Formatting and compliance instructions appended to every prompt.
pub const FOOTER: &str = "\n\nConstraints: Use clear headings and bullet points where helpful. \
Avoid hallucinating facts. Add a final section: 'Important Notice: This document is \
AI-generated and must be reviewed by a qualified attorney.'";

pub fn build_prompt(
    doc_type: &str,
    party1: &str,
    party2: &str,
    duration: Option<&str>,
    salary: Option<&str>,
) -> Result<String, LexdraftError> {
    let canonical = normalize(doc_type)
        .ok_or_else(|| LexdraftError::InvalidDocumentType(doc_type.to_string()))?;

    let vars = HashMap::from([
        ("party1", party1),
        ("party2", party2),
        ("duration", duration.unwrap_or_default()),
        ("salary", salary.unwrap_or_default()),
    ]);
    let mut prompt = canonical.template().render(&vars);
    prompt.push_str(FOOTER);
    Ok(prompt)
}

pub fn build_request_prompt(request: &DocumentRequest) -> Result<String, LexdraftError> {
    build_prompt(
        &request.doc_type,
        &request.party1,
        &request.party2,
        request.duration.as_deref(),
        request.salary.as_deref(),
    )
}
