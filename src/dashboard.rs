//! This module provides the main entry point for a dashboard session. A
//! [`Dashboard`] owns the observation corpus and the station catalog, loading
//! each lazily on first use and keeping it for the rest of its lifetime, and
//! answers station/granularity/date-range queries on top of them.

use crate::aggregator;
use crate::error::DashboardError;
use crate::observations::data_loader::{load_from, DEFAULT_DATA_DIR};
use crate::observations::Observations;
use crate::stations::catalog::{
    load_catalog_from, StationCatalog, StationLocation, DEFAULT_CATALOG_DIR, DEFAULT_CATALOG_FILE,
};
use crate::summary::{summarize, summarize_weather, MetricSummary, WeatherSummary};
use crate::types::granularity::Granularity;
use crate::types::tables::AggregatedTables;
use crate::wind_rose::{reduce_wind, CompassTable};
use bon::bon;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

type QueryKey = (String, Granularity, NaiveDate, NaiveDate);

/// Everything a presentation layer renders for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    pub station: String,
    pub granularity: Granularity,
    pub tables: AggregatedTables,
    /// `None` when the window holds no observation.
    pub pollutant_summary: Option<MetricSummary>,
    /// `None` when the window holds no observation.
    pub weather_summary: Option<WeatherSummary>,
    pub wind_rose: CompassTable,
    /// `None` when the station is missing from the catalog or no catalog exists.
    pub location: Option<StationLocation>,
}

/// A dashboard session over one corpus root.
///
/// The corpus and the catalog are read from disk at most once per session;
/// aggregation results are memoised per `(station, granularity, start, end)`.
///
/// # Examples
///
/// ```no_run
/// # use air_quality_dashboard::{Dashboard, DashboardError, Granularity};
/// # use chrono::NaiveDate;
/// # fn main() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::builder().root("/srv/air-quality").build();
///
/// let tables = dashboard
///     .aggregate()
///     .station("Dongsi")
///     .granularity(Granularity::Monthly)
///     .start(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2017, 1, 31).unwrap())
///     .call()?;
/// println!("{}", tables.pollutants.frame);
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    root: PathBuf,
    data_dir_name: String,
    catalog_dir_name: String,
    catalog_file_name: String,
    observations: OnceLock<Observations>,
    catalog: OnceLock<StationCatalog>,
    query_cache: Mutex<HashMap<QueryKey, AggregatedTables>>,
}

#[bon]
impl Dashboard {
    /// Creates a session rooted at `root`. Nothing is read until first use.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory searched recursively for observation and catalog files.
    /// * `data_dir_name` - Name of the directories holding observation CSVs (default `data`).
    /// * `catalog_dir_name` - Name of the directory holding the catalog (default `dashboard`).
    /// * `catalog_file_name` - Catalog file name (default `country.txt`).
    #[builder]
    pub fn new(
        #[builder(into)] root: PathBuf,
        #[builder(into, default = DEFAULT_DATA_DIR.to_string())] data_dir_name: String,
        #[builder(into, default = DEFAULT_CATALOG_DIR.to_string())] catalog_dir_name: String,
        #[builder(into, default = DEFAULT_CATALOG_FILE.to_string())] catalog_file_name: String,
    ) -> Self {
        Self {
            root,
            data_dir_name,
            catalog_dir_name,
            catalog_file_name,
            observations: OnceLock::new(),
            catalog: OnceLock::new(),
            query_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The observation corpus, loaded on first call.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Load`] if the corpus cannot be found or read.
    /// A failed load is retried on the next call.
    pub fn observations(&self) -> Result<&Observations, DashboardError> {
        if let Some(observations) = self.observations.get() {
            return Ok(observations);
        }
        let loaded = load_from(&self.root, &self.data_dir_name)?;
        Ok(self.observations.get_or_init(|| loaded))
    }

    /// The station catalog, loaded on first call.
    pub fn catalog(&self) -> Result<&StationCatalog, DashboardError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let loaded =
            load_catalog_from(&self.root, &self.catalog_dir_name, &self.catalog_file_name)?;
        Ok(self.catalog.get_or_init(|| loaded))
    }

    /// Coordinates of `station`, if the catalog lists it.
    pub fn location(&self, station: &str) -> Result<Option<&StationLocation>, DashboardError> {
        Ok(self.catalog()?.get(station))
    }

    /// Aggregates the corpus for one station, granularity and inclusive date
    /// range. See [`crate::aggregate`].
    #[builder]
    pub fn aggregate(
        &self,
        #[builder(into)] station: String,
        granularity: Granularity,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AggregatedTables, DashboardError> {
        let key = (station, granularity, start, end);
        if let Some(cached) = self.cached(&key) {
            debug!("Query cache hit for {} {} {}..={}", key.0, key.1, key.2, key.3);
            return Ok(cached);
        }

        let tables = aggregator::aggregate(self.observations()?, &key.0, granularity, start, end)?;
        self.query_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, tables.clone());
        Ok(tables)
    }

    /// Aggregates, summarises and reduces one selection in a single call.
    ///
    /// The catalog is optional here: a missing catalog leaves `location` empty
    /// instead of failing the whole view.
    #[builder]
    pub fn view(
        &self,
        #[builder(into)] station: String,
        granularity: Granularity,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<StationView, DashboardError> {
        let tables = self
            .aggregate()
            .station(station.clone())
            .granularity(granularity)
            .start(start)
            .end(end)
            .call()?;
        let location = match self.catalog() {
            Ok(catalog) => catalog.get(&station).cloned(),
            Err(e) => {
                debug!("No station location for {}: {}", station, e);
                None
            }
        };

        Ok(StationView {
            pollutant_summary: summarize(&tables.pollutants)?,
            weather_summary: summarize_weather(&tables.weather)?,
            wind_rose: reduce_wind(&tables.wind)?,
            station,
            granularity,
            tables,
            location,
        })
    }

    /// Number of memoised aggregation results.
    pub fn cached_queries(&self) -> usize {
        self.query_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn cached(&self, key: &QueryKey) -> Option<AggregatedTables> {
        self.query_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }
}
