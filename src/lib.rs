mod aggregator;
mod dashboard;
mod error;
mod observations;
mod stations;
mod summary;
mod types;
mod utils;
mod wind_rose;

#[cfg(test)]
mod test_support;

pub use dashboard::*;
pub use error::DashboardError;

pub use aggregator::{aggregate, ObservationFilterExt};
pub use observations::data_loader::{load, load_from};
pub use observations::Observations;
pub use stations::catalog::{load_catalog, load_catalog_from, StationCatalog, StationLocation};
pub use summary::{summarize, summarize_weather, MetricSummary, WeatherSummary};
pub use wind_rose::{reduce_wind, CompassCount, CompassTable};

pub use types::air_quality::AirQuality;
pub use types::columns;
pub use types::compass::CompassDirection;
pub use types::granularity::Granularity;
pub use types::tables::{AggregatedTables, PollutantTable, WeatherTable, WindTable};

pub use observations::error::LoadError;
pub use stations::error::CatalogError;
