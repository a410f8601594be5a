use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable")]
    Unavailable,

    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}
