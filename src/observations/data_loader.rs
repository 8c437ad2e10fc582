use crate::observations::error::LoadError;
use crate::observations::Observations;
use crate::types::columns::{
    COL_DATE, COL_DAY, COL_MONTH, COL_STATION, COL_WD, COL_YEAR, MEASUREMENT_COLUMNS,
    TIME_COLUMNS,
};
use crate::utils::{files_in, find_named_dirs};
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
const NULL_VALUE: &str = "NA";

/// Loads the observation corpus from every `data` directory under `root`.
///
/// See [`load_from`].
pub fn load(root: &Path) -> Result<Observations, LoadError> {
    load_from(root, DEFAULT_DATA_DIR)
}

/// Loads, cleans and concatenates every observation file found in a
/// directory named `data_dir_name` anywhere under `root`.
///
/// Files are read in path order. Missing readings are filled by linear
/// interpolation along that row order, and a trailing gap repeats the last
/// known reading. Rows that still hold a null afterwards (a gap before the
/// first reading, or a missing wind direction) are dropped.
/// Finally a `date` column is derived from `year`, `month` and `day`.
///
/// # Errors
///
/// Returns [`LoadError::NoDataFound`] if no file is found,
/// [`LoadError::CsvRead`] / [`LoadError::MissingColumn`] if a file cannot be
/// parsed or lacks one of the required columns.
pub fn load_from(root: &Path, data_dir_name: &str) -> Result<Observations, LoadError> {
    let files = discover_files(root, data_dir_name)?;
    if files.is_empty() {
        return Err(LoadError::NoDataFound {
            root: root.to_path_buf(),
            dir_name: data_dir_name.to_string(),
        });
    }
    info!(
        "Loading {} observation files from {}",
        files.len(),
        root.display()
    );

    let frames = files
        .iter()
        .map(|path| read_observation_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let interpolated = concat(frames, UnionArgs::default())?
        .with_columns(
            MEASUREMENT_COLUMNS
                .iter()
                .map(|name| {
                    col(*name)
                        .interpolate(InterpolationMethod::Linear)
                        .fill_null_with_strategy(FillNullStrategy::Forward(None))
                })
                .collect::<Vec<_>>(),
        )
        .collect()?;
    let raw_height = interpolated.height();

    let frame = interpolated
        .lazy()
        .drop_nulls(None)
        .with_column(
            datetime(DatetimeArgs::new(
                col(COL_YEAR),
                col(COL_MONTH),
                col(COL_DAY),
            ))
            .cast(DataType::Date)
            .alias(COL_DATE),
        )
        .collect()?;

    let dropped = raw_height - frame.height();
    if dropped > 0 {
        warn!(
            "Dropped {} of {} observations still incomplete after interpolation",
            dropped, raw_height
        );
    }
    info!("Loaded {} observations", frame.height());

    Ok(Observations::new(frame))
}

fn discover_files(root: &Path, data_dir_name: &str) -> Result<Vec<PathBuf>, LoadError> {
    let walk_err = |e| LoadError::DirectoryWalk(root.to_path_buf(), e);
    let mut files = Vec::new();
    for dir in find_named_dirs(root, data_dir_name).map_err(walk_err)? {
        files.extend(files_in(&dir).map_err(walk_err)?);
    }
    files.sort();
    Ok(files)
}

/// Reads one CSV file and projects it onto the canonical observation schema.
fn read_observation_file(path: &Path) -> Result<LazyFrame, LoadError> {
    let csv_err = |source| LoadError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_null_values(Some(NullValues::AllColumnsSingle(NULL_VALUE.into()))),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_err)?
        .finish()
        .map_err(csv_err)?;

    let required = TIME_COLUMNS
        .iter()
        .chain(MEASUREMENT_COLUMNS.iter())
        .chain([COL_STATION, COL_WD].iter());
    for column in required {
        if df.get_column_index(column).is_none() {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    debug!("Read {} rows from {}", df.height(), path.display());

    let mut projection: Vec<Expr> = TIME_COLUMNS
        .iter()
        .map(|name| col(*name).cast(DataType::Int32))
        .collect();
    projection.push(col(COL_STATION).cast(DataType::String));
    projection.extend(
        MEASUREMENT_COLUMNS
            .iter()
            .map(|name| col(*name).cast(DataType::Float64)),
    );
    projection.push(col(COL_WD).cast(DataType::String));

    Ok(df.lazy().select(projection))
}
