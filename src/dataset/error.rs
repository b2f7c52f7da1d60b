use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    // IO and filesystem errors
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // Filename labelling errors, all fatal for the directory being scanned
    #[error("Filename does not match the <pid>_c<camid> convention: {}", .path.display())]
    FilenameMismatch { path: PathBuf },

    #[error("Label '{value}' is not an integer in {}", .path.display())]
    InvalidLabel { path: PathBuf, value: String },

    #[error("Identity {pid} outside [0, {max}] in {}", .path.display(), max = super::parser::MAX_PID)]
    IdentityOutOfRange { path: PathBuf, pid: i64 },

    // Registry errors
    #[error("No dataset registered under '{0}'")]
    UnknownDataset(String),

    #[error("Dataset '{0}' is already registered")]
    DuplicateDataset(String),
}
