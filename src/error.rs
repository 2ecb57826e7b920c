use std::path::PathBuf;

/// A line that named a command but whose parameters could not be extracted.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum ClassifyError {
    #[error("How far? Give the number of steps, e.g. 'move up 3'")]
    MissingAmount,

    #[error("Amount '{digits}' is too large")]
    AmountOutOfRange { digits: String },
}

/// Failures of a notification sink. These are logged and never abort a session.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Can't find file: {path}")]
    MissingClip { path: PathBuf },

    #[error("Audio player '{player}' failed: {reason}")]
    Player { player: String, reason: String },
}

/// Fatal failures: the terminal can no longer be written, or input can't be read.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("Terminal stream failed: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Reading input failed: {0}")]
    Input(std::io::Error),
}

pub type TermResult<T> = Result<T, TermError>;
