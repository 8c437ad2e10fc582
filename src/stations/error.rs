use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No '{file_name}' found in any '{dir_name}' directory under '{root}'")]
    NotFound {
        root: PathBuf,
        dir_name: String,
        file_name: String,
    },

    #[error("Failed to walk directory tree under '{0}'")]
    DirectoryWalk(PathBuf, #[source] walkdir::Error),

    #[error("Failed to read station catalog '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in station catalog '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed processing station catalog: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
