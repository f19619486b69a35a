use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactsError {
    #[error("Command failed: {command} - {error}")]
    CommandFailed { command: String, error: String },

    #[error("Invalid fact {name}: {reason}")]
    InvalidFact { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
