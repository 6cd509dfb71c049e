use serde::Serialize;

use lexdraft_core::GenerationOptions;

/// Body of a `POST /api/generate` call.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SamplingOptions>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SamplingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl GenerateRequest {
    /// `options.model` wins over `default_model`; unset sampling fields are
    /// left out, and the whole `options` object is omitted when none are set.
    pub fn new(
        prompt: impl Into<String>,
        default_model: &str,
        options: &GenerationOptions,
        stream: bool,
    ) -> Self {
        let sampling = SamplingOptions {
            temperature: options.temperature,
            top_p: options.top_p,
            num_predict: options.num_predict,
        };
        Self {
            model: options
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            prompt: prompt.into(),
            stream,
            options: (sampling != SamplingOptions::default()).then_some(sampling),
        }
    }
}
