use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{GenerationOptions, LexdraftError};

/// A text-generation service reachable from the document generator.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Single-shot completion; resolves to the full generated text.
    async fn generate(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<String, LexdraftError>;

    /// Incremental completion. Chunks arrive in backend emission order and
    /// carry no boundary guarantees.
    fn generate_stream(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> BoxStream<'_, Result<String, LexdraftError>>;
}
