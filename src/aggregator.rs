use crate::error::DashboardError;
use crate::observations::Observations;
use crate::types::columns::{
    COL_COUNT, COL_DATE, COL_STATION, COL_WD, POLLUTANT_COLUMNS, WEATHER_COLUMNS,
};
use crate::types::granularity::Granularity;
use crate::types::tables::{AggregatedTables, PollutantTable, WeatherTable, WindTable};
use chrono::NaiveDate;
use log::{debug, warn};
use polars::prelude::{
    col, len, lit, DataFrame, DataType, LazyFrame, PolarsError, SortMultipleOptions,
};

pub trait ObservationFilterExt {
    /// Keeps only the rows recorded at `station`.
    fn filter_station(self, station: &str) -> LazyFrame;

    /// Keeps only the rows whose derived `date` lies in `[start, end]` (inclusive).
    /// An inverted range keeps nothing.
    fn filter_dates(self, start: NaiveDate, end: NaiveDate) -> LazyFrame;
}

impl ObservationFilterExt for LazyFrame {
    fn filter_station(self, station: &str) -> LazyFrame {
        self.filter(col(COL_STATION).eq(lit(station)))
    }

    fn filter_dates(self, start: NaiveDate, end: NaiveDate) -> LazyFrame {
        self.filter(
            col(COL_DATE)
                .gt_eq(lit(start))
                .and(col(COL_DATE).lt_eq(lit(end))),
        )
    }
}

/// Filters the corpus to one station and date range and groups it by `granularity`.
///
/// Returns the mean pollutant table, the mean meteorological table and the
/// per-direction observation counts, each keyed by a single `time` column and
/// sorted ascending by time. Buckets without observations produce no row.
///
/// An unknown station or a range outside the data yields three empty tables
/// rather than an error.
pub fn aggregate(
    observations: &Observations,
    station: &str,
    granularity: Granularity,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<AggregatedTables, DashboardError> {
    let filtered = observations
        .lazy()
        .filter_station(station)
        .filter_dates(start, end);

    let tables = AggregatedTables {
        pollutants: PollutantTable::new(mean_table(
            filtered.clone(),
            granularity,
            &POLLUTANT_COLUMNS,
        )?),
        weather: WeatherTable::new(mean_table(filtered.clone(), granularity, &WEATHER_COLUMNS)?),
        wind: WindTable::new(count_table(filtered, granularity)?),
    };

    if tables.is_empty() {
        warn!(
            "No observations for station '{}' between {} and {}",
            station, start, end
        );
    }
    debug!(
        "Aggregated {} {} from {} to {}: {} buckets, {} wind rows",
        station,
        granularity,
        start,
        end,
        tables.pollutants.height(),
        tables.wind.height()
    );
    Ok(tables)
}

/// Mean of each of `columns` per time bucket.
fn mean_table(
    filtered: LazyFrame,
    granularity: Granularity,
    columns: &[&str],
) -> Result<DataFrame, PolarsError> {
    let keys = granularity.key_exprs();

    let mut output = vec![granularity.time_label()];
    output.extend(columns.iter().map(|name| col(*name)));

    filtered
        .group_by(keys.clone())
        .agg(columns.iter().map(|name| col(*name).mean()).collect::<Vec<_>>())
        .sort_by_exprs(keys, SortMultipleOptions::default())
        .select(output)
        .collect()
}

/// Number of observations per time bucket and wind direction.
fn count_table(filtered: LazyFrame, granularity: Granularity) -> Result<DataFrame, PolarsError> {
    let mut keys = granularity.key_exprs();
    keys.push(col(COL_WD));

    filtered
        .group_by(keys.clone())
        .agg([len().cast(DataType::Int64).alias(COL_COUNT)])
        .sort_by_exprs(keys, SortMultipleOptions::default())
        .select([granularity.time_label(), col(COL_WD), col(COL_COUNT)])
        .collect()
}
