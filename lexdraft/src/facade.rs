use std::sync::Arc;

use async_stream::try_stream;
use futures::stream::{BoxStream, StreamExt};
use lexdraft_core::{
    BackendConfig, BlockingStream, DocumentRequest, GenerationBackend, GenerationOptions,
    LexdraftError,
};
use lexdraft_llm::OllamaClient;

use crate::{BlockingDocumentGenerator, DocumentGenerator};

/// Validates the request and lays its sampling options over the configured
/// defaults.
fn resolve_options(
    request: &DocumentRequest,
    defaults: &GenerationOptions,
) -> Result<GenerationOptions, LexdraftError> {
    request.validate()?;
    Ok(request.options().or(defaults))
}

/// Entry point used by the service endpoint.
pub struct LegalAssistant<B = OllamaClient> {
    generator: DocumentGenerator<B>,
    defaults: GenerationOptions,
}

impl LegalAssistant<OllamaClient> {
    pub fn from_config(config: &BackendConfig) -> Result<Self, LexdraftError> {
        Ok(Self::new(OllamaClient::new(config)?, config.defaults.clone()))
    }
}

impl<B: GenerationBackend> LegalAssistant<B> {
    pub fn new(backend: B, defaults: GenerationOptions) -> Self {
        Self {
            generator: DocumentGenerator::new(backend),
            defaults,
        }
    }

    pub fn generator(&self) -> &DocumentGenerator<B> {
        &self.generator
    }

    pub fn defaults(&self) -> &GenerationOptions {
        &self.defaults
    }

    pub async fn generate(&self, request: &DocumentRequest) -> Result<String, LexdraftError> {
        let options = resolve_options(request, &self.defaults)?;
        self.generator.generate(request, options).await
    }

    pub fn generate_stream(
        &self,
        request: &DocumentRequest,
    ) -> Result<BoxStream<'_, Result<String, LexdraftError>>, LexdraftError> {
        let options = resolve_options(request, &self.defaults)?;
        self.generator.generate_stream(request, options)
    }

    /// Like [`generate_stream`](Self::generate_stream), but the stream owns the
    /// assistant so it can outlive the caller's borrow (e.g. as a response
    /// body). Validation and prompt resolution still happen eagerly.
    pub fn generate_stream_shared(
        self: Arc<Self>,
        request: DocumentRequest,
    ) -> Result<BoxStream<'static, Result<String, LexdraftError>>, LexdraftError>
    where
        B: 'static,
    {
        let options = resolve_options(&request, &self.defaults)?;
        let prompt = self.generator.prompt_for(&request)?;
        Ok(try_stream! {
            let mut chunks = self.generator.backend().generate_stream(prompt, options);
            while let Some(chunk) = chunks.next().await {
                yield chunk?;
            }
        }
        .boxed())
    }
}

/// Entry point used by the synchronous form UI.
pub struct BlockingLegalAssistant<B = OllamaClient> {
    generator: BlockingDocumentGenerator<B>,
    defaults: GenerationOptions,
}

impl BlockingLegalAssistant<OllamaClient> {
    pub fn from_config(config: &BackendConfig) -> Result<Self, LexdraftError> {
        Self::new(OllamaClient::new(config)?, config.defaults.clone())
    }
}

impl<B: GenerationBackend> BlockingLegalAssistant<B> {
    pub fn new(backend: B, defaults: GenerationOptions) -> Result<Self, LexdraftError> {
        Ok(Self {
            generator: BlockingDocumentGenerator::new(backend)?,
            defaults,
        })
    }

    pub fn generate(&self, request: &DocumentRequest) -> Result<String, LexdraftError> {
        let options = resolve_options(request, &self.defaults)?;
        self.generator.generate(request, options)
    }

    pub fn generate_stream(
        &self,
        request: &DocumentRequest,
    ) -> Result<BlockingStream<'_, String>, LexdraftError> {
        let options = resolve_options(request, &self.defaults)?;
        self.generator.generate_stream(request, options)
    }
}
