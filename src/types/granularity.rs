//! Defines the time granularity used to bucket station observations before
//! averaging, together with the grouping keys and display label each one uses.

use crate::error::DashboardError;
use crate::types::columns::{COL_DAY, COL_HOUR, COL_MONTH, COL_TIME, COL_YEAR};
use polars::prelude::{col, datetime, lit, DatetimeArgs, Expr};
use std::fmt;
use std::str::FromStr;

/// The time-bucketing unit applied by [`crate::aggregate`].
///
/// Each variant selects a different set of grouping columns and a different
/// shape for the synthesised `time` label of the aggregated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Granularity {
    /// One bucket per (year, month, day, hour). The label is a datetime.
    Hourly,
    /// One bucket per calendar day. The label is a `YYYY-MM-DD` string.
    Daily,
    /// One bucket per calendar month. The label is a `YYYY-MM` string.
    Monthly,
    /// One bucket per year. The label is the year itself.
    Yearly,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 4] = [
        Granularity::Hourly,
        Granularity::Daily,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Granularity::Hourly => "Hourly",
            Granularity::Daily => "Daily",
            Granularity::Monthly => "Monthly",
            Granularity::Yearly => "Yearly",
        }
    }

    /// Columns that make up the group key, most significant first.
    pub(crate) fn key_columns(&self) -> &'static [&'static str] {
        match self {
            Granularity::Hourly => &[COL_YEAR, COL_MONTH, COL_DAY, COL_HOUR],
            Granularity::Daily => &[COL_YEAR, COL_MONTH, COL_DAY],
            Granularity::Monthly => &[COL_YEAR, COL_MONTH],
            Granularity::Yearly => &[COL_YEAR],
        }
    }

    pub(crate) fn key_exprs(&self) -> Vec<Expr> {
        self.key_columns().iter().map(|name| col(*name)).collect()
    }

    /// Builds the expression producing the `time` label from the key columns.
    ///
    /// Monthly labels are built from the first day of the month; the day is
    /// not part of the formatted output.
    pub(crate) fn time_label(&self) -> Expr {
        let label = match self {
            Granularity::Hourly => datetime(
                DatetimeArgs::new(col(COL_YEAR), col(COL_MONTH), col(COL_DAY))
                    .with_hms(col(COL_HOUR), lit(0), lit(0)),
            ),
            Granularity::Daily => {
                datetime(DatetimeArgs::new(col(COL_YEAR), col(COL_MONTH), col(COL_DAY)))
                    .dt()
                    .strftime("%Y-%m-%d")
            }
            Granularity::Monthly => {
                datetime(DatetimeArgs::new(col(COL_YEAR), col(COL_MONTH), lit(1)))
                    .dt()
                    .strftime("%Y-%m")
            }
            Granularity::Yearly => col(COL_YEAR),
        };
        label.alias(COL_TIME)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a granularity from its name, ignoring case.
///
/// # Examples
///
/// ```
/// use air_quality_dashboard::Granularity;
///
/// assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
/// assert!("weekly".parse::<Granularity>().is_err());
/// ```
impl FromStr for Granularity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnsupportedGranularity(s.to_string()))
    }
}
