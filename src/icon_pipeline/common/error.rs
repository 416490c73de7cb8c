use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode ICO container: {0}")]
    EncodeError(String),

    #[error("Unsupported icon size: {0}px (ICO entries must be 1..=256)")]
    UnsupportedSize(u32),

    #[error("No icon sizes requested")]
    EmptySizeSet,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
