use crate::observations::error::LoadError;
use crate::stations::error::CatalogError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Unsupported granularity '{0}', expected one of Hourly, Daily, Monthly, Yearly")]
    UnsupportedGranularity(String),

    #[error("Unknown wind direction label '{0}' in wind table")]
    UnknownWindDirection(String),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
