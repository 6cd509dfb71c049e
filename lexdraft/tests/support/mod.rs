#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use lexdraft::{GenerationBackend, GenerationOptions, LexdraftError};

#[derive(Debug, Default)]
pub struct Recorded {
    pub prompts: Vec<String>,
    pub options: Vec<GenerationOptions>,
}

/// In-memory backend that records what it was asked and replays fixed chunks.
#[derive(Clone, Default)]
pub struct FakeBackend {
    chunks: Vec<String>,
    failure: Option<String>,
    recorded: Arc<Mutex<Recorded>>,
}

impl FakeBackend {
    pub fn with_chunks(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|chunk| chunk.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.recorded.lock().expect("lock").prompts.len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.recorded.lock().expect("lock").prompts.last().cloned()
    }

    pub fn last_options(&self) -> Option<GenerationOptions> {
        self.recorded.lock().expect("lock").options.last().cloned()
    }

    fn record(&self, prompt: String, options: GenerationOptions) {
        let mut recorded = self.recorded.lock().expect("lock");
        recorded.prompts.push(prompt);
        recorded.options.push(options);
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<String, LexdraftError> {
        self.record(prompt, options);
        match &self.failure {
            Some(message) => Err(LexdraftError::Backend(message.clone())),
            None => Ok(self.chunks.concat()),
        }
    }

    fn generate_stream(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> BoxStream<'_, Result<String, LexdraftError>> {
        self.record(prompt, options);
        let mut items: Vec<Result<String, LexdraftError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        if let Some(message) = &self.failure {
            items.push(Err(LexdraftError::Backend(message.clone())));
        }
        stream::iter(items).boxed()
    }
}
