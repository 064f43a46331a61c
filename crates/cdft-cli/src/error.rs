use cdft::core::error::ModelError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input file '{path}': {source}", path = path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid input in '{path}': {message}", path = path.display())]
    InvalidInput { path: PathBuf, message: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
