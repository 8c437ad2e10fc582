//! Scalar summaries of an aggregated window: average pollutant levels with an
//! air-quality classification, and average meteorological readings.

use crate::error::DashboardError;
use crate::types::air_quality::AirQuality;
use crate::types::columns::{
    COL_CO, COL_DEWP, COL_NO2, COL_O3, COL_PM10, COL_PM25, COL_PRES, COL_SO2, COL_TEMP, COL_WSPM,
};
use crate::types::tables::{PollutantTable, WeatherTable};
use serde::{Deserialize, Serialize};

/// Average pollutant concentrations (µg/m³) over the selected window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub pm25: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub o3: f64,
    pub co: f64,
    /// Classification of `pm25`.
    pub air_quality: AirQuality,
}

impl MetricSummary {
    /// `(column name, value)` pairs in display order.
    pub fn values(&self) -> [(&'static str, f64); 6] {
        [
            (COL_PM25, self.pm25),
            (COL_PM10, self.pm10),
            (COL_SO2, self.so2),
            (COL_NO2, self.no2),
            (COL_O3, self.o3),
            (COL_CO, self.co),
        ]
    }
}

/// Average meteorological readings over the selected window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Temperature, °C.
    pub temperature: f64,
    /// Pressure, hPa.
    pub pressure: f64,
    /// Dew point, °C.
    pub dew_point: f64,
    /// Wind speed, m/s.
    pub wind_speed: f64,
}

/// Averages every pollutant column of `table` over all its buckets and
/// classifies the resulting PM2.5 level.
///
/// This is a mean of the bucket means, so each bucket weighs the same
/// regardless of how many observations it holds. Returns `None` for an empty
/// table.
pub fn summarize(table: &PollutantTable) -> Result<Option<MetricSummary>, DashboardError> {
    if table.is_empty() {
        return Ok(None);
    }
    let mean = |name| table.column_mean(name);
    let (Some(pm25), Some(pm10), Some(so2), Some(no2), Some(o3), Some(co)) = (
        mean(COL_PM25)?,
        mean(COL_PM10)?,
        mean(COL_SO2)?,
        mean(COL_NO2)?,
        mean(COL_O3)?,
        mean(COL_CO)?,
    ) else {
        return Ok(None);
    };

    Ok(Some(MetricSummary {
        pm25,
        pm10,
        so2,
        no2,
        o3,
        co,
        air_quality: AirQuality::from_pm25(pm25),
    }))
}

/// Averages every meteorological column of `table` over all its buckets.
pub fn summarize_weather(table: &WeatherTable) -> Result<Option<WeatherSummary>, DashboardError> {
    if table.is_empty() {
        return Ok(None);
    }
    let mean = |name| table.column_mean(name);
    let (Some(temperature), Some(pressure), Some(dew_point), Some(wind_speed)) = (
        mean(COL_TEMP)?,
        mean(COL_PRES)?,
        mean(COL_DEWP)?,
        mean(COL_WSPM)?,
    ) else {
        return Ok(None);
    };

    Ok(Some(WeatherSummary {
        temperature,
        pressure,
        dew_point,
        wind_speed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::test_support::{load_rows, two_station_rows, RawRow};
    use crate::types::granularity::Granularity;
    use chrono::NaiveDate;
    use polars::prelude::*;

    fn pollutant_table(pm25: &[f64]) -> Result<PollutantTable, PolarsError> {
        let n = pm25.len();
        let frame = DataFrame::new(vec![
            Column::new("time".into(), (0..n as i32).collect::<Vec<_>>()),
            Column::new(COL_PM25.into(), pm25.to_vec()),
            Column::new(COL_PM10.into(), vec![20.0; n]),
            Column::new(COL_SO2.into(), vec![3.0; n]),
            Column::new(COL_NO2.into(), vec![40.0; n]),
            Column::new(COL_O3.into(), vec![50.0; n]),
            Column::new(COL_CO.into(), vec![600.0; n]),
        ])?;
        Ok(PollutantTable::new(frame))
    }

    #[test]
    fn test_summary_classifies_mean_pm25() -> Result<(), Box<dyn std::error::Error>> {
        let cases = [
            (vec![9.0, 9.18], AirQuality::Good),
            (vec![9.1], AirQuality::Moderate),
            (vec![35.0, 35.98], AirQuality::Moderate),
            (vec![50.0, 60.0], AirQuality::UnhealthyForSensitiveGroups),
            (vec![100.0], AirQuality::Unhealthy),
            (vec![200.0, 250.0], AirQuality::VeryUnhealthy),
            (vec![225.5], AirQuality::Hazardous),
        ];
        for (values, expected) in cases {
            let summary = summarize(&pollutant_table(&values)?)?.expect("table is not empty");
            assert_eq!(summary.air_quality, expected, "PM2.5 values {:?}", values);
        }
        Ok(())
    }

    #[test]
    fn test_summary_means() -> Result<(), Box<dyn std::error::Error>> {
        let summary =
            summarize(&pollutant_table(&[10.0, 20.0, 60.0])?)?.expect("table is not empty");
        assert_eq!(summary.pm25, 30.0);
        assert_eq!(summary.co, 600.0);
        assert_eq!(summary.values()[0], ("PM2.5", 30.0));
        assert_eq!(summary.values()[5].0, "CO");
        Ok(())
    }

    #[test]
    fn test_summary_is_a_mean_of_bucket_means() -> Result<(), Box<dyn std::error::Error>> {
        // Day one has three observations of 10, day two a single one of 40.
        let rows = vec![
            RawRow::new("Huairou", 2016, 5, 1, 0).with("NO2", Some(10.0)),
            RawRow::new("Huairou", 2016, 5, 1, 1).with("NO2", Some(10.0)),
            RawRow::new("Huairou", 2016, 5, 1, 2).with("NO2", Some(10.0)),
            RawRow::new("Huairou", 2016, 5, 2, 0).with("NO2", Some(40.0)),
        ];
        let observations = load_rows(&rows)?;
        let start = NaiveDate::from_ymd_opt(2016, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 5, 2).unwrap();
        let tables = aggregate(&observations, "Huairou", Granularity::Daily, start, end)?;

        let summary = summarize(&tables.pollutants)?.expect("window is not empty");
        assert_eq!(summary.no2, 25.0);
        Ok(())
    }

    #[test]
    fn test_empty_tables_have_no_summary() -> Result<(), Box<dyn std::error::Error>> {
        let observations = load_rows(&two_station_rows())?;
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let tables = aggregate(&observations, "Dongsi", Granularity::Daily, day, day)?;

        assert_eq!(summarize(&tables.pollutants)?, None);
        assert_eq!(summarize_weather(&tables.weather)?, None);
        Ok(())
    }

    #[test]
    fn test_weather_summary() -> Result<(), Box<dyn std::error::Error>> {
        let rows = vec![
            RawRow::new("Shunyi", 2016, 7, 1, 0)
                .with("TEMP", Some(20.0))
                .with("WSPM", Some(1.0)),
            RawRow::new("Shunyi", 2016, 7, 2, 0)
                .with("TEMP", Some(30.0))
                .with("WSPM", Some(3.0)),
        ];
        let observations = load_rows(&rows)?;
        let start = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 7, 2).unwrap();
        let tables = aggregate(&observations, "Shunyi", Granularity::Daily, start, end)?;

        let summary = summarize_weather(&tables.weather)?.expect("window is not empty");
        assert_eq!(
            summary,
            WeatherSummary {
                temperature: 25.0,
                pressure: 1020.0,
                dew_point: -10.0,
                wind_speed: 2.0,
            }
        );
        Ok(())
    }
}
