use lexdraft_core::{
    BackendConfig, BlockingRuntime, BlockingStream, GenerationOptions, LexdraftError,
};

use crate::OllamaClient;

/// Thread-blocking counterpart of [`OllamaClient`].
///
/// Drives the async client on an owned current-thread runtime, so request and
/// response handling is shared with the async path. Do not call from inside a
/// tokio runtime.
#[derive(Debug)]
pub struct BlockingOllamaClient {
    inner: OllamaClient,
    runtime: BlockingRuntime,
}

impl BlockingOllamaClient {
    pub fn new(config: &BackendConfig) -> Result<Self, LexdraftError> {
        Ok(Self {
            inner: OllamaClient::new(config)?,
            runtime: BlockingRuntime::new()?,
        })
    }

    pub fn call(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LexdraftError> {
        self.runtime.block_on(self.inner.call(prompt, options))
    }

    pub fn stream_call(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> BlockingStream<'_, String> {
        self.runtime.iter(self.inner.stream_call(prompt, options))
    }
}
