use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No observation files found in any '{dir_name}' directory under '{root}'")]
    NoDataFound { root: PathBuf, dir_name: String },

    #[error("Failed to walk directory tree under '{0}'")]
    DirectoryWalk(PathBuf, #[source] walkdir::Error),

    #[error("Failed to read observation file '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in observation file '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed processing observations: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
