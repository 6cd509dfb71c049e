use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexdraftError {
    #[error(
        "Invalid document type '{0}'. Choose from rental agreement, employment contract, \
         business partnership agreement, or NDA."
    )]
    InvalidDocumentType(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Backend request failed: {0}")]
    Backend(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Blocking runtime could not be started: {0}")]
    Runtime(#[source] std::io::Error),
}

impl LexdraftError {
    /// True for faults caused by the caller's input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LexdraftError::InvalidDocumentType(_) | LexdraftError::InvalidRequest(_)
        )
    }
}
