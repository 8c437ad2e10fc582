//! Column names of the observation corpus and of the aggregated tables.

// Time parts
pub const COL_YEAR: &str = "year";
pub const COL_MONTH: &str = "month";
pub const COL_DAY: &str = "day";
pub const COL_HOUR: &str = "hour";

// Derived
pub const COL_DATE: &str = "date";
pub const COL_TIME: &str = "time";
pub const COL_COUNT: &str = "count";

pub const COL_STATION: &str = "station";
pub const COL_WD: &str = "wd"; // Wind direction label

// Pollutants, µg/m³
pub const COL_PM25: &str = "PM2.5";
pub const COL_PM10: &str = "PM10";
pub const COL_SO2: &str = "SO2";
pub const COL_NO2: &str = "NO2";
pub const COL_O3: &str = "O3";
pub const COL_CO: &str = "CO";

// Meteorological
pub const COL_TEMP: &str = "TEMP"; // °C
pub const COL_PRES: &str = "PRES"; // hPa
pub const COL_DEWP: &str = "DEWP"; // °C
pub const COL_WSPM: &str = "WSPM"; // m/s

pub const TIME_COLUMNS: [&str; 4] = [COL_YEAR, COL_MONTH, COL_DAY, COL_HOUR];

pub const POLLUTANT_COLUMNS: [&str; 6] = [COL_PM25, COL_PM10, COL_SO2, COL_NO2, COL_O3, COL_CO];

pub const WEATHER_COLUMNS: [&str; 4] = [COL_TEMP, COL_PRES, COL_DEWP, COL_WSPM];

/// Every numeric reading, in the order they are interpolated.
pub const MEASUREMENT_COLUMNS: [&str; 10] = [
    COL_PM25, COL_PM10, COL_SO2, COL_NO2, COL_O3, COL_CO, COL_TEMP, COL_PRES, COL_DEWP, COL_WSPM,
];
