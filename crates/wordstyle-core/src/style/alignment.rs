//! Table alignment types

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Alignment settings of a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    value: Option<TableAlignment>,
}

impl Alignment {
    /// Create an alignment with no value set
    pub fn new() -> Self {
        Self::default()
    }

    /// Current alignment, if any
    pub fn value(&self) -> Option<TableAlignment> {
        self.value
    }

    /// Set the alignment
    pub fn set_value(&mut self, value: TableAlignment) -> &mut Self {
        self.value = Some(value);
        self
    }

    /// Set the alignment from its markup name
    ///
    /// Unknown names are rejected and leave the current value in place.
    pub fn set_value_str(&mut self, value: &str) -> Result<&mut Self> {
        let value = value.parse()?;
        Ok(self.set_value(value))
    }
}

/// Horizontal placement of a table on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TableAlignment {
    /// Leading edge (left in left-to-right text)
    Start,
    /// Centered
    Center,
    /// Trailing edge
    End,
    /// Left (legacy)
    Left,
    /// Right (legacy)
    Right,
}

impl TableAlignment {
    /// Markup name of the alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            TableAlignment::Start => "start",
            TableAlignment::Center => "center",
            TableAlignment::End => "end",
            TableAlignment::Left => "left",
            TableAlignment::Right => "right",
        }
    }
}

impl fmt::Display for TableAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(TableAlignment::Start),
            "center" => Ok(TableAlignment::Center),
            "end" => Ok(TableAlignment::End),
            "left" => Ok(TableAlignment::Left),
            "right" => Ok(TableAlignment::Right),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}
