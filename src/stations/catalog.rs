//! Defines the static station catalog: station identifier to coordinates,
//! used to place the selected station on a map.

use crate::stations::error::CatalogError;
use crate::utils::find_named_dirs;
use log::info;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_DIR: &str = "dashboard";
pub const DEFAULT_CATALOG_FILE: &str = "country.txt";

/// Accepted header names for each coordinate, first match wins.
const LATITUDE_COLUMNS: [&str; 2] = ["lat", "latitude"];
const LONGITUDE_COLUMNS: [&str; 2] = ["lon", "longitude"];

/// Geographical location of one monitoring station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLocation {
    /// Station identifier as used in the observation corpus (e.g. "Dongsi").
    pub station: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// All known station locations, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCatalog {
    entries: Vec<StationLocation>,
}

impl StationCatalog {
    pub fn new(entries: Vec<StationLocation>) -> Self {
        Self { entries }
    }

    pub fn get(&self, station: &str) -> Option<&StationLocation> {
        self.entries.iter().find(|entry| entry.station == station)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationLocation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads `dashboard/country.txt` found anywhere under `root`.
pub fn load_catalog(root: &Path) -> Result<StationCatalog, CatalogError> {
    load_catalog_from(root, DEFAULT_CATALOG_DIR, DEFAULT_CATALOG_FILE)
}

/// Loads the catalog file `file_name` from the first directory named
/// `dir_name` under `root` (in sorted walk order) that contains it.
pub fn load_catalog_from(
    root: &Path,
    dir_name: &str,
    file_name: &str,
) -> Result<StationCatalog, CatalogError> {
    let path = locate_catalog_file(root, dir_name, file_name)?;
    let csv_err = |source| CatalogError::CsvRead {
        path: path.clone(),
        source,
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.clone()))
        .map_err(csv_err)?
        .finish()
        .map_err(csv_err)?;

    let station = df
        .column("station")
        .map_err(|_| missing_column(&path, "station"))?
        .cast(&DataType::String)?;
    let latitude = coordinate_column(&df, &path, &LATITUDE_COLUMNS)?;
    let longitude = coordinate_column(&df, &path, &LONGITUDE_COLUMNS)?;

    let entries: Vec<StationLocation> = station
        .str()?
        .into_iter()
        .zip(latitude.f64()?.into_iter())
        .zip(longitude.f64()?.into_iter())
        .filter_map(|((station, latitude), longitude)| {
            Some(StationLocation {
                station: station?.trim().to_string(),
                latitude: latitude?,
                longitude: longitude?,
            })
        })
        .collect();

    info!(
        "Loaded {} station locations from {}",
        entries.len(),
        path.display()
    );
    Ok(StationCatalog::new(entries))
}

fn locate_catalog_file(
    root: &Path,
    dir_name: &str,
    file_name: &str,
) -> Result<PathBuf, CatalogError> {
    find_named_dirs(root, dir_name)
        .map_err(|e| CatalogError::DirectoryWalk(root.to_path_buf(), e))?
        .into_iter()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| CatalogError::NotFound {
            root: root.to_path_buf(),
            dir_name: dir_name.to_string(),
            file_name: file_name.to_string(),
        })
}

fn coordinate_column(
    df: &DataFrame,
    path: &Path,
    candidates: &[&str],
) -> Result<Column, CatalogError> {
    let name = candidates
        .iter()
        .find(|name| df.get_column_index(name).is_some())
        .ok_or_else(|| missing_column(path, candidates[0]))?;
    Ok(df.column(name)?.cast(&DataType::Float64)?)
}

fn missing_column(path: &Path, column: &str) -> CatalogError {
    CatalogError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    }
}
