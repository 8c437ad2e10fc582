//! Defines the `CompassDirection` enum, the 16-point compass rose used for the
//! `wd` (wind direction) column of the observation corpus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 16 points of the compass rose.
///
/// The discriminant is the position of the direction in clockwise order
/// starting from north, which is the order wind roses are drawn in. Variants
/// therefore compare and sort circularly-from-north, not alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompassDirection {
    /// North, 0°.
    N = 0,
    /// North-northeast, 22.5°.
    NNE = 1,
    /// Northeast, 45°.
    NE = 2,
    /// East-northeast, 67.5°.
    ENE = 3,
    /// East, 90°.
    E = 4,
    /// East-southeast, 112.5°.
    ESE = 5,
    /// Southeast, 135°.
    SE = 6,
    /// South-southeast, 157.5°.
    SSE = 7,
    /// South, 180°.
    S = 8,
    /// South-southwest, 202.5°.
    SSW = 9,
    /// Southwest, 225°.
    SW = 10,
    /// West-southwest, 247.5°.
    WSW = 11,
    /// West, 270°.
    W = 12,
    /// West-northwest, 292.5°.
    WNW = 13,
    /// Northwest, 315°.
    NW = 14,
    /// North-northwest, 337.5°.
    NNW = 15,
}

impl CompassDirection {
    /// All directions in clockwise order starting from north.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::NNE,
        CompassDirection::NE,
        CompassDirection::ENE,
        CompassDirection::E,
        CompassDirection::ESE,
        CompassDirection::SE,
        CompassDirection::SSE,
        CompassDirection::S,
        CompassDirection::SSW,
        CompassDirection::SW,
        CompassDirection::WSW,
        CompassDirection::W,
        CompassDirection::WNW,
        CompassDirection::NW,
        CompassDirection::NNW,
    ];

    /// Parses the label used in the `wd` column (e.g. `"NNE"`).
    ///
    /// Returns `None` for anything that is not one of the 16 labels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use air_quality_dashboard::CompassDirection;
    ///
    /// assert_eq!(CompassDirection::from_label("WSW"), Some(CompassDirection::WSW));
    /// assert_eq!(CompassDirection::from_label("NA"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "N" => Some(CompassDirection::N),
            "NNE" => Some(CompassDirection::NNE),
            "NE" => Some(CompassDirection::NE),
            "ENE" => Some(CompassDirection::ENE),
            "E" => Some(CompassDirection::E),
            "ESE" => Some(CompassDirection::ESE),
            "SE" => Some(CompassDirection::SE),
            "SSE" => Some(CompassDirection::SSE),
            "S" => Some(CompassDirection::S),
            "SSW" => Some(CompassDirection::SSW),
            "SW" => Some(CompassDirection::SW),
            "WSW" => Some(CompassDirection::WSW),
            "W" => Some(CompassDirection::W),
            "WNW" => Some(CompassDirection::WNW),
            "NW" => Some(CompassDirection::NW),
            "NNW" => Some(CompassDirection::NNW),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NNE => "NNE",
            CompassDirection::NE => "NE",
            CompassDirection::ENE => "ENE",
            CompassDirection::E => "E",
            CompassDirection::ESE => "ESE",
            CompassDirection::SE => "SE",
            CompassDirection::SSE => "SSE",
            CompassDirection::S => "S",
            CompassDirection::SSW => "SSW",
            CompassDirection::SW => "SW",
            CompassDirection::WSW => "WSW",
            CompassDirection::W => "W",
            CompassDirection::WNW => "WNW",
            CompassDirection::NW => "NW",
            CompassDirection::NNW => "NNW",
        }
    }

    /// Bearing of the direction in degrees clockwise from north.
    pub fn degrees(&self) -> f64 {
        *self as u8 as f64 * 22.5
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
