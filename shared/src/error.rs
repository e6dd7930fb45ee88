use thiserror::Error;

/// Error taxonomy for the chatbot.
///
/// `Configuration` and `Embedding` are fatal at startup; there is no
/// degraded mode without a knowledge base or an index.
/// `CompletionRequest` is recoverable per turn: the failed turn is reported
/// and the session continues.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Missing/invalid knowledge source or missing required credential.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Embedding collaborator unreachable or returned inconsistent output.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Outbound call to the completion service failed.
    #[error("completion request failed: {0}")]
    CompletionRequest(String),
}
