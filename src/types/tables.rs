//! Contains the three tables produced by the aggregator: pollutant means,
//! meteorological means and wind-direction counts per time bucket.
//!
//! Every table wraps a collected Polars `DataFrame` whose first column is
//! `time`. Rows are sorted ascending by time bucket.

use crate::error::DashboardError;
use crate::types::columns::{COL_COUNT, COL_WD};
use polars::prelude::{ChunkAgg, DataFrame};

/// Mean of a float column, `None` when the frame has no non-null values.
pub(crate) fn column_mean(frame: &DataFrame, name: &str) -> Result<Option<f64>, DashboardError> {
    Ok(frame.column(name)?.f64()?.mean())
}

/// Mean pollutant concentrations per time bucket.
///
/// Columns: `time`, `PM2.5`, `PM10`, `SO2`, `NO2`, `O3`, `CO`.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantTable {
    pub frame: DataFrame,
}

impl PollutantTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Number of time buckets.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Mean over all buckets of one pollutant column (a mean of means).
    pub fn column_mean(&self, name: &str) -> Result<Option<f64>, DashboardError> {
        column_mean(&self.frame, name)
    }
}

/// Mean meteorological readings per time bucket.
///
/// Columns: `time`, `TEMP`, `PRES`, `DEWP`, `WSPM`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTable {
    pub frame: DataFrame,
}

impl WeatherTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn column_mean(&self, name: &str) -> Result<Option<f64>, DashboardError> {
        column_mean(&self.frame, name)
    }
}

/// Number of observations per time bucket and wind direction.
///
/// Columns: `time`, `wd`, `count`. A (bucket, direction) pair only appears
/// when at least one observation falls into it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindTable {
    pub frame: DataFrame,
}

impl WindTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The `(wd, count)` pairs of every row, in table order.
    pub fn direction_counts(&self) -> Result<Vec<(String, i64)>, DashboardError> {
        let directions = self.frame.column(COL_WD)?.str()?;
        let counts = self.frame.column(COL_COUNT)?.i64()?;
        Ok(directions
            .into_iter()
            .zip(counts.into_iter())
            .filter_map(|(wd, count)| Some((wd?.to_string(), count?)))
            .collect())
    }

    /// Total number of observations counted in the table.
    pub fn total(&self) -> Result<i64, DashboardError> {
        Ok(self.frame.column(COL_COUNT)?.i64()?.sum().unwrap_or(0))
    }
}

/// The three tables returned by one aggregation query.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedTables {
    pub pollutants: PollutantTable,
    pub weather: WeatherTable,
    pub wind: WindTable,
}

impl AggregatedTables {
    /// True when the query matched no observation at all.
    pub fn is_empty(&self) -> bool {
        self.pollutants.is_empty() && self.weather.is_empty() && self.wind.is_empty()
    }
}
