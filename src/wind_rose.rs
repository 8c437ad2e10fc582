//! Reduces a wind table to a closed 16-point compass rose.

use crate::error::DashboardError;
use crate::types::compass::CompassDirection;
use crate::types::tables::WindTable;
use serde::{Deserialize, Serialize};

/// Number of observations from one compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassCount {
    pub direction: CompassDirection,
    pub count: i64,
}

/// Observation counts for all 16 compass directions, clockwise from north.
///
/// Always holds exactly one entry per direction; directions without
/// observations have a count of zero so the rose can be drawn closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassTable {
    entries: [CompassCount; 16],
}

impl CompassTable {
    /// A rose with every count at zero.
    pub fn empty() -> Self {
        Self {
            entries: CompassDirection::ALL.map(|direction| CompassCount { direction, count: 0 }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompassCount> {
        self.entries.iter()
    }

    pub fn count(&self, direction: CompassDirection) -> i64 {
        self.entries[direction as usize].count
    }

    pub fn total(&self) -> i64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Largest single-direction count, the natural scale for bars.
    pub fn max_count(&self) -> i64 {
        self.entries.iter().map(|entry| entry.count).max().unwrap_or(0)
    }

    /// Entries ordered by count, highest first. Ties keep compass order.
    pub fn sorted_by_count(&self) -> Vec<CompassCount> {
        let mut sorted = self.entries.to_vec();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl Default for CompassTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sums the counts of `table` per wind direction over every time bucket.
///
/// # Errors
///
/// Returns [`DashboardError::UnknownWindDirection`] if the table holds a
/// label that is not one of the 16 compass points.
pub fn reduce_wind(table: &WindTable) -> Result<CompassTable, DashboardError> {
    let mut rose = CompassTable::empty();
    for (label, count) in table.direction_counts()? {
        let direction = CompassDirection::from_label(&label)
            .ok_or(DashboardError::UnknownWindDirection(label))?;
        rose.entries[direction as usize].count += count;
    }
    Ok(rose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::test_support::{load_rows, two_station_rows};
    use crate::types::granularity::Granularity;
    use chrono::NaiveDate;
    use polars::prelude::*;

    fn wind_table(rows: &[(&str, &str, i64)]) -> Result<WindTable, PolarsError> {
        let frame = DataFrame::new(vec![
            Column::new("time".into(), rows.iter().map(|r| r.0).collect::<Vec<_>>()),
            Column::new("wd".into(), rows.iter().map(|r| r.1).collect::<Vec<_>>()),
            Column::new("count".into(), rows.iter().map(|r| r.2).collect::<Vec<_>>()),
        ])?;
        Ok(WindTable::new(frame))
    }

    #[test]
    fn test_counts_are_summed_and_zero_filled() -> Result<(), Box<dyn std::error::Error>> {
        let table = wind_table(&[
            ("2016-01", "NW", 4),
            ("2016-01", "E", 1),
            ("2016-02", "NW", 6),
            ("2016-02", "ENE", 2),
        ])?;

        let rose = reduce_wind(&table)?;
        let directions: Vec<CompassDirection> = rose.iter().map(|e| e.direction).collect();
        assert_eq!(directions, CompassDirection::ALL.to_vec());
        assert_eq!(rose.count(CompassDirection::NW), 10);
        assert_eq!(rose.count(CompassDirection::ENE), 2);
        assert_eq!(rose.count(CompassDirection::E), 1);
        assert_eq!(rose.count(CompassDirection::N), 0);
        assert_eq!(rose.total(), 13);
        assert_eq!(rose.max_count(), 10);
        Ok(())
    }

    #[test]
    fn test_sorted_by_count() -> Result<(), Box<dyn std::error::Error>> {
        let table = wind_table(&[("2016", "S", 3), ("2016", "N", 7), ("2016", "SW", 3)])?;

        let sorted = reduce_wind(&table)?.sorted_by_count();
        let top: Vec<(CompassDirection, i64)> =
            sorted.iter().take(3).map(|e| (e.direction, e.count)).collect();
        assert_eq!(
            top,
            vec![
                (CompassDirection::N, 7),
                (CompassDirection::S, 3),
                (CompassDirection::SW, 3),
            ]
        );
        assert_eq!(sorted.len(), 16);
        Ok(())
    }

    #[test]
    fn test_unknown_label_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let table = wind_table(&[("2016", "NORTH", 1)])?;
        let err = reduce_wind(&table).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownWindDirection(ref l) if l == "NORTH"));
        Ok(())
    }

    #[test]
    fn test_rose_from_aggregation_is_complete() -> Result<(), Box<dyn std::error::Error>> {
        let observations = load_rows(&two_station_rows())?;
        let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 1, 3).unwrap();

        for granularity in Granularity::ALL {
            let tables = aggregate(&observations, "Aotizhongxin", granularity, start, end)?;
            let rose = reduce_wind(&tables.wind)?;
            assert_eq!(rose.iter().count(), 16);
            assert_eq!(rose.total(), 72, "{} rose total", granularity);
            for direction in [
                CompassDirection::N,
                CompassDirection::E,
                CompassDirection::S,
                CompassDirection::W,
            ] {
                assert_eq!(rose.count(direction), 18);
            }
            assert_eq!(rose.count(CompassDirection::NNE), 0);
        }
        Ok(())
    }

    #[test]
    fn test_empty_window_gives_all_zero_rose() -> Result<(), Box<dyn std::error::Error>> {
        let observations = load_rows(&two_station_rows())?;
        let day = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let tables = aggregate(&observations, "Dongsi", Granularity::Yearly, day, day)?;

        let rose = reduce_wind(&tables.wind)?;
        assert_eq!(rose, CompassTable::empty());
        assert_eq!(rose.max_count(), 0);
        Ok(())
    }
}
