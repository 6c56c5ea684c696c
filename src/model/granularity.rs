use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Controls how the time axis is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Semiannual,
    Yearly,
}

impl Granularity {
    /// strftime-style label format the renderer applies to its own ticks
    /// when no explicit boundaries are supplied.
    pub fn tick_format(self) -> &'static str {
        match self {
            Granularity::Daily | Granularity::Weekly => "%Y-%m-%d",
            Granularity::Monthly | Granularity::Quarterly | Granularity::Semiannual => "%Y-%m",
            Granularity::Yearly => "%Y",
        }
    }

    /// Whether this granularity produces an explicit boundary list, as
    /// opposed to relying on the renderer's native axis.
    pub fn has_explicit_bounds(self) -> bool {
        !matches!(self, Granularity::Daily | Granularity::Monthly)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::Semiannual => "semiannual",
            Granularity::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Granularity::Daily),
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            "quarterly" | "quarter" => Ok(Granularity::Quarterly),
            "semiannual" | "halfyear" | "half-year" => Ok(Granularity::Semiannual),
            "yearly" | "year" => Ok(Granularity::Yearly),
            other => Err(format!(
                "unknown granularity '{}' (expected daily, weekly, monthly, quarterly, \
                 semiannual or yearly)",
                other
            )),
        }
    }
}

/// One labelled boundary on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub at: NaiveDate,
    pub label: String,
}
