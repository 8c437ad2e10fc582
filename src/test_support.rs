//! Synthetic observation corpora for unit tests.

use crate::observations::data_loader::load;
use crate::observations::Observations;
use crate::types::columns::MEASUREMENT_COLUMNS;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const HEADER: &str =
    "No,year,month,day,hour,PM2.5,PM10,SO2,NO2,O3,CO,TEMP,PRES,DEWP,RAIN,wd,WSPM,station";

/// One raw CSV row. Measurements are stored in `MEASUREMENT_COLUMNS` order.
#[derive(Debug, Clone)]
pub(crate) struct RawRow {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub station: String,
    pub values: [Option<f64>; 10],
    pub wd: Option<String>,
}

impl RawRow {
    pub fn new(station: &str, year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            station: station.to_string(),
            values: [
                Some(10.0),
                Some(20.0),
                Some(3.0),
                Some(40.0),
                Some(50.0),
                Some(600.0),
                Some(5.0),
                Some(1020.0),
                Some(-10.0),
                Some(2.0),
            ],
            wd: Some("N".to_string()),
        }
    }

    /// Overrides one measurement; `None` writes `NA`.
    pub fn with(mut self, column: &str, value: Option<f64>) -> Self {
        if let Some(idx) = MEASUREMENT_COLUMNS.iter().position(|c| *c == column) {
            self.values[idx] = value;
        }
        self
    }

    pub fn wd(mut self, wd: Option<&str>) -> Self {
        self.wd = wd.map(str::to_string);
        self
    }

    fn to_csv_line(&self, no: usize) -> String {
        let v = |idx: usize| match self.values[idx] {
            Some(x) => format!("{:.2}", x),
            None => "NA".to_string(),
        };
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},0.00,{},{},{}",
            no,
            self.year,
            self.month,
            self.day,
            self.hour,
            v(0),
            v(1),
            v(2),
            v(3),
            v(4),
            v(5),
            v(6),
            v(7),
            v(8),
            self.wd.as_deref().unwrap_or("NA"),
            v(9),
            self.station,
        )
    }
}

/// `hours` consecutive hourly rows starting at midnight of the given day.
pub(crate) fn day_rows(station: &str, year: i32, month: u32, day: u32, hours: u32) -> Vec<RawRow> {
    (0..hours)
        .map(|hour| RawRow::new(station, year, month, day, hour))
        .collect()
}

pub(crate) fn write_csv(path: &Path, rows: &[RawRow]) -> std::io::Result<()> {
    let mut content = String::from(HEADER);
    content.push('\n');
    for (no, row) in rows.iter().enumerate() {
        writeln!(content, "{}", row.to_csv_line(no + 1)).map_err(std::io::Error::other)?;
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Writes a single `data/observations.csv` into a fresh temp dir and loads it.
pub(crate) fn load_rows(rows: &[RawRow]) -> Result<Observations, Box<dyn std::error::Error>> {
    let root = tempfile::tempdir()?;
    write_csv(&root.path().join("data/observations.csv"), rows)?;
    Ok(load(root.path())?)
}

/// Two stations over three days (2016-01-01 ..= 2016-01-03), 24 hours each.
///
/// Station A rotates through wind directions hour by hour, station B always
/// blows from the south. PM2.5 at station A equals the day of month times ten.
pub(crate) fn two_station_rows() -> Vec<RawRow> {
    let directions = ["N", "E", "S", "W"];
    let mut rows = Vec::new();
    for day in 1..=3 {
        for hour in 0..24 {
            rows.push(
                RawRow::new("Aotizhongxin", 2016, 1, day, hour)
                    .with("PM2.5", Some(day as f64 * 10.0))
                    .wd(Some(directions[hour as usize % 4])),
            );
        }
    }
    for day in 1..=3 {
        for hour in 0..24 {
            rows.push(
                RawRow::new("Dongsi", 2016, 1, day, hour)
                    .with("PM2.5", Some(500.0))
                    .wd(Some("S")),
            );
        }
    }
    rows
}
