//! The in-memory observation corpus and its loader.

pub mod data_loader;
pub mod error;

use crate::error::DashboardError;
use crate::types::columns::{COL_DATE, COL_STATION};
use chrono::NaiveDate;
use polars::prelude::{col, ChunkAgg, DataFrame, DataType, IntoLazy, LazyFrame, SortOptions};

// Days between 0001-01-01 (chrono's CE day 1) and 1970-01-01 (Polars' Date epoch).
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The cleaned observation corpus: one row per station per hour, no nulls.
///
/// Columns: `year`, `month`, `day`, `hour` (Int32), `station` (String), the six
/// pollutant and four meteorological readings (Float64), `wd` (String) and
/// the derived `date` (Date).
///
/// Created by [`crate::load`]; immutable afterwards. Cloning is cheap, the
/// underlying column buffers are shared.
#[derive(Debug, Clone)]
pub struct Observations {
    frame: DataFrame,
}

impl Observations {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A lazy view over the corpus for building queries.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Distinct station identifiers, sorted.
    pub fn stations(&self) -> Result<Vec<String>, DashboardError> {
        let unique = self
            .lazy()
            .select([col(COL_STATION).unique().sort(SortOptions::default())])
            .collect()?;
        Ok(unique
            .column(COL_STATION)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect())
    }

    pub fn has_station(&self, station: &str) -> Result<bool, DashboardError> {
        Ok(self
            .frame
            .column(COL_STATION)?
            .str()?
            .into_iter()
            .any(|s| s == Some(station)))
    }

    /// Earliest and latest observation date, `None` for an empty corpus.
    pub fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>, DashboardError> {
        let days = self.frame.column(COL_DATE)?.cast(&DataType::Int32)?;
        let days = days.i32()?;
        let to_date =
            |d: i32| NaiveDate::from_num_days_from_ce_opt(d + UNIX_EPOCH_DAYS_FROM_CE);
        Ok(match (days.min(), days.max()) {
            (Some(min), Some(max)) => to_date(min).zip(to_date(max)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{day_rows, load_rows, RawRow};
    use chrono::NaiveDate;

    #[test]
    fn test_stations_are_distinct_and_sorted() -> Result<(), Box<dyn std::error::Error>> {
        let mut rows = day_rows("Wanliu", 2015, 6, 1, 3);
        rows.extend(day_rows("Changping", 2015, 6, 1, 3));
        rows.push(RawRow::new("Wanliu", 2015, 6, 2, 0));
        let observations = load_rows(&rows)?;

        assert_eq!(observations.stations()?, vec!["Changping", "Wanliu"]);
        assert!(observations.has_station("Wanliu")?);
        assert!(!observations.has_station("Gucheng")?);
        Ok(())
    }

    #[test]
    fn test_date_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let mut rows = day_rows("Tiantan", 2014, 12, 31, 2);
        rows.extend(day_rows("Tiantan", 2013, 3, 1, 2));
        rows.extend(day_rows("Tiantan", 2017, 2, 28, 2));
        let observations = load_rows(&rows)?;

        assert_eq!(
            observations.date_bounds()?,
            Some((
                NaiveDate::from_ymd_opt(2013, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2017, 2, 28).unwrap()
            ))
        );
        Ok(())
    }
}
