//! Shading (background fill) types

use std::fmt;
use std::str::FromStr;

use crate::config::{expect_color, expect_str, Strictness, StyleProperties, StyleValue};
use crate::error::{Error, Result};

/// Background shading
///
/// Unset fields are `None`; merging another shading only copies the
/// fields that one actually sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shading {
    /// Fill (background) color
    pub fill: Option<String>,
    /// Pattern foreground color
    pub color: Option<String>,
    /// Pattern
    pub pattern: Option<ShadingPattern>,
}

impl Shading {
    /// Create an empty shading
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shading with only a fill color
    pub fn from_fill<S: Into<String>>(color: S) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Set the pattern color
    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the pattern
    pub fn with_pattern(mut self, pattern: ShadingPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Copy every field that `other` sets
    pub fn merge(&mut self, other: Shading) -> &mut Self {
        if other.fill.is_some() {
            self.fill = other.fill;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        self
    }
}

impl StyleProperties for Shading {
    fn set_property(&mut self, key: &str, value: &StyleValue, _: Strictness) -> Result<()> {
        match key {
            "fill" => self.fill = expect_color(key, value)?,
            "color" => self.color = expect_color(key, value)?,
            "pattern" => self.pattern = Some(expect_str(key, value)?.parse()?),
            _ => return Err(Error::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Shading patterns, named as they appear in document markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ShadingPattern {
    /// No pattern, fill only
    #[default]
    Clear,
    /// 100% pattern color
    Solid,
    HorzStripe,
    VertStripe,
    ReverseDiagStripe,
    DiagStripe,
    HorzCross,
    DiagCross,
    Pct10,
    Pct20,
    Pct25,
    Pct50,
    Pct75,
    Pct90,
}

impl ShadingPattern {
    /// Every pattern, in markup order
    pub const ALL: [ShadingPattern; 14] = [
        ShadingPattern::Clear,
        ShadingPattern::Solid,
        ShadingPattern::HorzStripe,
        ShadingPattern::VertStripe,
        ShadingPattern::ReverseDiagStripe,
        ShadingPattern::DiagStripe,
        ShadingPattern::HorzCross,
        ShadingPattern::DiagCross,
        ShadingPattern::Pct10,
        ShadingPattern::Pct20,
        ShadingPattern::Pct25,
        ShadingPattern::Pct50,
        ShadingPattern::Pct75,
        ShadingPattern::Pct90,
    ];

    /// Markup name of the pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingPattern::Clear => "clear",
            ShadingPattern::Solid => "solid",
            ShadingPattern::HorzStripe => "horzStripe",
            ShadingPattern::VertStripe => "vertStripe",
            ShadingPattern::ReverseDiagStripe => "reverseDiagStripe",
            ShadingPattern::DiagStripe => "diagStripe",
            ShadingPattern::HorzCross => "horzCross",
            ShadingPattern::DiagCross => "diagCross",
            ShadingPattern::Pct10 => "pct10",
            ShadingPattern::Pct20 => "pct20",
            ShadingPattern::Pct25 => "pct25",
            ShadingPattern::Pct50 => "pct50",
            ShadingPattern::Pct75 => "pct75",
            ShadingPattern::Pct90 => "pct90",
        }
    }
}

impl fmt::Display for ShadingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadingPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| Error::InvalidPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleConfig;

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut shading = Shading::from_fill("FF0000").with_pattern(ShadingPattern::Pct25);
        shading.merge(Shading::new().with_color("0000FF"));

        assert_eq!(shading.fill.as_deref(), Some("FF0000"));
        assert_eq!(shading.color.as_deref(), Some("0000FF"));
        assert_eq!(shading.pattern, Some(ShadingPattern::Pct25));
    }

    #[test]
    fn test_pattern_names() {
        assert_eq!("horzStripe".parse::<ShadingPattern>(), Ok(ShadingPattern::HorzStripe));
        assert_eq!(ShadingPattern::ReverseDiagStripe.to_string(), "reverseDiagStripe");
        assert_eq!(
            "plaid".parse::<ShadingPattern>(),
            Err(Error::InvalidPattern("plaid".into()))
        );
    }

    #[test]
    fn test_apply_config() {
        let mut shading = Shading::new();
        shading.apply_config(
            &StyleConfig::new()
                .with("fill", "00FF00")
                .with("pattern", "bogus")
                .with("texture", "rough"),
        );

        assert_eq!(shading, Shading::from_fill("00FF00"));
    }
}
