use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabsiftError {
    #[error("Invalid JSON tab snapshot: {0}")]
    InvalidJson(String),

    #[error("Invalid tab event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
