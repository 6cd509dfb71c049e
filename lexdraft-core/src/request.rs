use serde::{Deserialize, Serialize};

use crate::{GenerationOptions, LexdraftError};

pub const MAX_NUM_PREDICT: u32 = 8192;

/// A single drafting request as received from the service endpoint or the form.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DocumentRequest {
    pub doc_type: String,
    pub party1: String,
    pub party2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl DocumentRequest {
    pub fn new(
        doc_type: impl Into<String>,
        party1: impl Into<String>,
        party2: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: doc_type.into(),
            party1: party1.into(),
            party2: party2.into(),
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    /// Sampling range checks shared by every entry point.
    ///
    /// Party names and the document type are not checked here; the type is
    /// resolved when the prompt is built.
    pub fn validate(&self) -> Result<(), LexdraftError> {
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(LexdraftError::InvalidRequest(format!(
                    "temperature must be within [0, 2], got {temperature}"
                )));
            }
        }
        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(LexdraftError::InvalidRequest(format!(
                    "top_p must be within [0, 1], got {top_p}"
                )));
            }
        }
        if let Some(num_predict) = self.num_predict {
            if !(1..=MAX_NUM_PREDICT).contains(&num_predict) {
                return Err(LexdraftError::InvalidRequest(format!(
                    "num_predict must be within [1, {MAX_NUM_PREDICT}], got {num_predict}"
                )));
            }
        }
        Ok(())
    }

    /// Presence check for the HTTP body: both party names must be non-empty.
    /// Whitespace-only names are accepted as given.
    pub fn require_parties(&self) -> Result<(), LexdraftError> {
        if self.party1.is_empty() {
            return Err(LexdraftError::InvalidRequest(
                "party1 must not be empty".to_string(),
            ));
        }
        if self.party2.is_empty() {
            return Err(LexdraftError::InvalidRequest(
                "party2 must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            model: None,
            temperature: self.temperature,
            top_p: self.top_p,
            num_predict: self.num_predict,
        }
    }
}
