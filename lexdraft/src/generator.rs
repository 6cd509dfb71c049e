use futures::stream::BoxStream;
use lexdraft_core::{
    BlockingRuntime, BlockingStream, DocumentRequest, GenerationBackend, GenerationOptions,
    LexdraftError,
};
use lexdraft_prompt::build_request_prompt;

/// Resolves the document type, builds the prompt and hands it to the backend.
pub struct DocumentGenerator<B> {
    backend: B,
}

impl<B: GenerationBackend> DocumentGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn prompt_for(&self, request: &DocumentRequest) -> Result<String, LexdraftError> {
        build_request_prompt(request)
    }

    /// Returns exactly the backend's completion text.
    pub async fn generate(
        &self,
        request: &DocumentRequest,
        options: GenerationOptions,
    ) -> Result<String, LexdraftError> {
        let prompt = self.prompt_for(request)?;
        tracing::debug!(doc_type = %request.doc_type, prompt_len = prompt.len(), "generating document");
        self.backend.generate(prompt, options).await
    }

    /// The prompt is resolved before the stream is created, so an unknown
    /// document type fails here rather than on first poll.
    pub fn generate_stream(
        &self,
        request: &DocumentRequest,
        options: GenerationOptions,
    ) -> Result<BoxStream<'_, Result<String, LexdraftError>>, LexdraftError> {
        let prompt = self.prompt_for(request)?;
        tracing::debug!(doc_type = %request.doc_type, prompt_len = prompt.len(), "streaming document");
        Ok(self.backend.generate_stream(prompt, options))
    }
}

/// [`DocumentGenerator`] for callers without an async runtime.
pub struct BlockingDocumentGenerator<B> {
    inner: DocumentGenerator<B>,
    runtime: BlockingRuntime,
}

impl<B: GenerationBackend> BlockingDocumentGenerator<B> {
    pub fn new(backend: B) -> Result<Self, LexdraftError> {
        Ok(Self {
            inner: DocumentGenerator::new(backend),
            runtime: BlockingRuntime::new()?,
        })
    }

    pub fn prompt_for(&self, request: &DocumentRequest) -> Result<String, LexdraftError> {
        self.inner.prompt_for(request)
    }

    pub fn generate(
        &self,
        request: &DocumentRequest,
        options: GenerationOptions,
    ) -> Result<String, LexdraftError> {
        self.runtime.block_on(self.inner.generate(request, options))
    }

    pub fn generate_stream(
        &self,
        request: &DocumentRequest,
        options: GenerationOptions,
    ) -> Result<BlockingStream<'_, String>, LexdraftError> {
        let chunks = self.inner.generate_stream(request, options)?;
        Ok(self.runtime.iter(chunks))
    }
}
