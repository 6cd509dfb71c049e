//! Callback surface for the drafting form.
//!
//! The form runs synchronously, so everything here goes through
//! [`BlockingLegalAssistant`]. Errors are turned into display strings instead
//! of being returned.

use lexdraft_core::{DocumentRequest, GenerationBackend, LexdraftError};
use lexdraft_prompt::{normalize, DocType};

use crate::BlockingLegalAssistant;

/// Document type choices in the order the form lists them.
pub const DOC_OPTIONS: [&str; 4] = [
    "Rental Agreement",
    "Employment Contract",
    "Business Partnership Agreement",
    "NDA",
];

pub fn shows_duration_field(label: &str) -> bool {
    normalize(label).is_some_and(DocType::uses_duration)
}

pub fn shows_salary_field(label: &str) -> bool {
    normalize(label).is_some_and(DocType::uses_salary)
}

/// Field values submitted by the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormInput {
    pub request: DocumentRequest,
    pub stream: bool,
}

impl FormInput {
    pub fn new(request: DocumentRequest, stream: bool) -> Self {
        Self { request, stream }
    }
}

pub fn present_error(err: &LexdraftError) -> String {
    if err.is_client_error() {
        format!("Input error: {err}")
    } else {
        format!("Generation error: {err}")
    }
}

impl<B: GenerationBackend> BlockingLegalAssistant<B> {
    /// Runs one form submission and returns the text to display.
    ///
    /// With `stream` set, `on_update` receives the accumulated text after every
    /// chunk. A failure part-way through replaces the output with the error
    /// message.
    pub fn run_form<F>(&self, input: &FormInput, mut on_update: F) -> String
    where
        F: FnMut(&str),
    {
        let result = if input.stream {
            self.accumulate(&input.request, &mut on_update)
        } else {
            self.generate(&input.request)
        };
        result.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "form generation failed");
            present_error(&err)
        })
    }

    fn accumulate<F>(&self, request: &DocumentRequest, on_update: &mut F) -> Result<String, LexdraftError>
    where
        F: FnMut(&str),
    {
        let mut accumulated = String::new();
        for chunk in self.generate_stream(request)? {
            accumulated.push_str(&chunk?);
            on_update(&accumulated);
        }
        Ok(accumulated)
    }
}
