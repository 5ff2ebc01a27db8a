//! Width unit types

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a table width value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WidthUnit {
    /// Width determined by content (default)
    #[default]
    Auto,
    /// Fiftieths of a percent of the available width
    Pct,
    /// Twips (1/20 of a point)
    Dxa,
}

impl WidthUnit {
    /// Markup name of the unit
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthUnit::Auto => "auto",
            WidthUnit::Pct => "pct",
            WidthUnit::Dxa => "dxa",
        }
    }
}

impl fmt::Display for WidthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(WidthUnit::Auto),
            "pct" => Ok(WidthUnit::Pct),
            "dxa" => Ok(WidthUnit::Dxa),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}
