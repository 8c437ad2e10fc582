//! Defines the `AirQuality` index, a PM2.5-threshold classification into six
//! ordered severity bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds (exclusive) of every band except the last, in µg/m³.
const BREAK_POINTS: [(f64, AirQuality); 5] = [
    (9.1, AirQuality::Good),
    (35.5, AirQuality::Moderate),
    (55.5, AirQuality::UnhealthyForSensitiveGroups),
    (125.5, AirQuality::Unhealthy),
    (225.5, AirQuality::VeryUnhealthy),
];

/// Air-quality category derived from a mean PM2.5 concentration.
///
/// Variants are ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AirQuality {
    /// PM2.5 below 9.1 µg/m³.
    Good,
    /// PM2.5 from 9.1 up to 35.5 µg/m³.
    Moderate,
    /// PM2.5 from 35.5 up to 55.5 µg/m³.
    UnhealthyForSensitiveGroups,
    /// PM2.5 from 55.5 up to 125.5 µg/m³.
    Unhealthy,
    /// PM2.5 from 125.5 up to 225.5 µg/m³.
    VeryUnhealthy,
    /// PM2.5 of 225.5 µg/m³ and above.
    Hazardous,
}

impl AirQuality {
    /// Classifies a PM2.5 concentration.
    ///
    /// Bands are half-open on their upper bound and checked in ascending
    /// order, so a value exactly on a break point belongs to the band above.
    /// NaN compares false against every bound and lands in `Hazardous`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use air_quality_dashboard::AirQuality;
    ///
    /// assert_eq!(AirQuality::from_pm25(9.09), AirQuality::Good);
    /// assert_eq!(AirQuality::from_pm25(9.1), AirQuality::Moderate);
    /// assert_eq!(AirQuality::from_pm25(300.0).color(), "brown");
    /// ```
    pub fn from_pm25(value: f64) -> Self {
        BREAK_POINTS
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, quality)| *quality)
            .unwrap_or(AirQuality::Hazardous)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQuality::Unhealthy => "Unhealthy",
            AirQuality::VeryUnhealthy => "Very Unhealthy",
            AirQuality::Hazardous => "Hazardous",
        }
    }

    /// Severity colour name used when displaying the category.
    pub fn color(&self) -> &'static str {
        match self {
            AirQuality::Good => "green",
            AirQuality::Moderate => "yellow",
            AirQuality::UnhealthyForSensitiveGroups => "orange",
            AirQuality::Unhealthy => "red",
            AirQuality::VeryUnhealthy => "purple",
            AirQuality::Hazardous => "brown",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
