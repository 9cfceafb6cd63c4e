use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[cfg(feature = "download_data")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "download_data")]
    #[error("Join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
    #[error("Permit file not found: {}", .0.display())]
    PermitFileNotFound(PathBuf),
    #[error("Required data files not found in the data directory and download_data feature is disabled")]
    RequiredFilesNotFound,
    #[error("Download requested but the download_data feature is disabled")]
    DownloadDisabled,
}
