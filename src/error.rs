use thiserror::Error;

/// Failures surfaced to the user by the file and clipboard operations.
///
/// Every failure is terminal to the single operation that raised it; the
/// in-memory document is never touched by a failed save or load.
#[derive(Debug, Error)]
pub enum Error {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("invalid thickness {input:?}: enter a positive whole number")]
    InvalidThickness { input: String },
}

pub type Result<T> = std::result::Result<T, Error>;
