mod blocking;
mod ollama;
mod types;

pub use blocking::BlockingOllamaClient;
pub use ollama::{parse_stream_line, OllamaClient};
pub use types::{GenerateRequest, SamplingOptions};
