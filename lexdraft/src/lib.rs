//! Legal document drafting over a local text-generation backend.
//!
//! A [`DocumentRequest`] names a document type and the parties involved. The
//! type is resolved to one of the fixed templates, the prompt is rendered with
//! a compliance footer, and the backend's output is returned whole or as a
//! stream of chunks.

mod facade;
mod generator;
pub mod ui;

pub use facade::{BlockingLegalAssistant, LegalAssistant};
pub use generator::{BlockingDocumentGenerator, DocumentGenerator};

pub use lexdraft_core::{
    BackendConfig, BlockingStream, DocumentRequest, GenerationBackend, GenerationOptions,
    LexdraftError,
};
pub use lexdraft_llm::{BlockingOllamaClient, OllamaClient};
pub use lexdraft_prompt::{build_prompt, normalize, DocType, DISCLOSURE};
