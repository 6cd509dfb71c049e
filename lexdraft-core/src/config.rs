use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::{GenerationOptions, LexdraftError};

pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "deepseek-r1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_NUM_PREDICT: u32 = 512;

/// Connection settings and sampling defaults for the generation backend.
#[derive(Clone, Debug, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub model: String,
    pub timeout: Duration,
    pub defaults: GenerationOptions,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            defaults: GenerationOptions {
                model: None,
                temperature: Some(DEFAULT_TEMPERATURE),
                top_p: Some(DEFAULT_TOP_P),
                num_predict: Some(DEFAULT_NUM_PREDICT),
            },
        }
    }
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = value.into();
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    pub fn temperature(mut self, value: Option<f32>) -> Self {
        self.defaults.temperature = value;
        self
    }

    pub fn top_p(mut self, value: Option<f32>) -> Self {
        self.defaults.top_p = value;
        self
    }

    pub fn num_predict(mut self, value: Option<u32>) -> Self {
        self.defaults.num_predict = value;
        self
    }

    /// Reads the configuration from the process environment, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, LexdraftError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(LexdraftError::InvalidConfig(format!(
                    "failed to load .env: {err}"
                )));
            }
        }
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::debug!(
            url = %config.url,
            model = %config.model,
            timeout = ?config.timeout,
            "loaded backend configuration"
        );
        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup. Missing keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LexdraftError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("OLLAMA_URL") {
            config.url = url;
        }
        if let Some(model) = lookup("MODEL_NAME") {
            config.model = model;
        }
        if let Some(seconds) = parse_var::<f64, _>(&lookup, "REQUEST_TIMEOUT")? {
            if !seconds.is_finite() || seconds <= 0.0 {
                return Err(LexdraftError::InvalidConfig(format!(
                    "REQUEST_TIMEOUT must be a positive number of seconds, got {seconds}"
                )));
            }
            config.timeout = Duration::from_secs_f64(seconds);
        }
        if let Some(value) = parse_var(&lookup, "TEMPERATURE")? {
            config.defaults.temperature = Some(value);
        }
        if let Some(value) = parse_var(&lookup, "TOP_P")? {
            config.defaults.top_p = Some(value);
        }
        if let Some(value) = parse_var(&lookup, "NUM_PREDICT")? {
            config.defaults.num_predict = Some(value);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LexdraftError> {
        Url::parse(&self.url).map_err(|err| {
            LexdraftError::InvalidConfig(format!("invalid backend url '{}': {err}", self.url))
        })?;
        if self.model.trim().is_empty() {
            return Err(LexdraftError::InvalidConfig(
                "model must not be empty".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(LexdraftError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, LexdraftError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|err| {
            LexdraftError::InvalidConfig(format!("{key}='{raw}' could not be parsed: {err}"))
        }),
        None => Ok(None),
    }
}
