mod backend;
pub mod blocking;
mod config;
mod error;
mod options;
mod request;

pub use backend::GenerationBackend;
pub use blocking::{BlockingRuntime, BlockingStream};
pub use config::{
    BackendConfig, DEFAULT_MODEL, DEFAULT_NUM_PREDICT, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
    DEFAULT_TOP_P, DEFAULT_URL,
};
pub use error::LexdraftError;
pub use options::GenerationOptions;
pub use request::{DocumentRequest, MAX_NUM_PREDICT};
