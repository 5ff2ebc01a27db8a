//! Dynamic style configuration
//!
//! Document-building code hands styles over as key/value mappings. This
//! module holds those mappings ([`StyleConfig`]), the values inside them
//! ([`StyleValue`]), and the [`StyleProperties`] trait that applies a
//! mapping to a style through a fixed whitelist of keys.

use std::fmt;

use crate::error::{Error, Result};

/// Largest integer magnitude an `f64` holds exactly
const MAX_EXACT_INT: u64 = 1 << 53;

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum StyleValue {
    /// Explicit null / absent value
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Nested mapping (e.g. a shading definition)
    Map(StyleConfig),
}

impl StyleValue {
    /// Short name of the value kind, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            StyleValue::Null => "null",
            StyleValue::Bool(_) => "boolean",
            StyleValue::Int(_) => "integer",
            StyleValue::Float(_) => "float",
            StyleValue::Str(_) => "string",
            StyleValue::Map(_) => "map",
        }
    }

    /// Interpret the value as a finite number
    ///
    /// Integers, finite floats and strings holding a number (surrounding
    /// whitespace allowed) qualify. Everything else, including null, does not.
    /// Integers beyond 2^53 have no exact `f64` form and are rejected.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            StyleValue::Int(i) if i.unsigned_abs() > MAX_EXACT_INT => return None,
            StyleValue::Int(i) => *i as f64,
            StyleValue::Float(f) => *f,
            StyleValue::Str(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        number.is_finite().then_some(number)
    }

    /// Interpret the value as a whole number (sizes, margins)
    ///
    /// Negative values are kept; fractions and values outside `i32` are not.
    pub fn as_size(&self) -> Option<i32> {
        let number = self.as_number()?;
        if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
            return None;
        }
        Some(number as i32)
    }

    /// Borrow the value as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the value as a nested mapping
    pub fn as_map(&self) -> Option<&StyleConfig> {
        match self {
            StyleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Check if this is [`StyleValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Null => write!(f, "null"),
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Int(i) => write!(f, "{}", i),
            StyleValue::Float(x) => write!(f, "{}", x),
            StyleValue::Str(s) => write!(f, "{:?}", s),
            StyleValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<i32> for StyleValue {
    fn from(i: i32) -> Self {
        StyleValue::Int(i64::from(i))
    }
}

impl From<i64> for StyleValue {
    fn from(i: i64) -> Self {
        StyleValue::Int(i)
    }
}

impl From<u32> for StyleValue {
    fn from(i: u32) -> Self {
        StyleValue::Int(i64::from(i))
    }
}

impl From<f64> for StyleValue {
    fn from(f: f64) -> Self {
        StyleValue::Float(f)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<StyleConfig> for StyleValue {
    fn from(map: StyleConfig) -> Self {
        StyleValue::Map(map)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

/// Ordered key/value style configuration
///
/// Entries are applied in insertion order, so a later `borderTopSize`
/// overrides an earlier `borderSize` for the top edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleConfig {
    entries: Vec<(String, StyleValue)>,
}

impl StyleConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    pub fn with<K: Into<String>, V: Into<StyleValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry, replacing an existing value for the same key in place
    pub fn insert<K: Into<String>, V: Into<StyleValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the configuration has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = StyleConfig::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StyleConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StyleConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> serde::de::Visitor<'de> for ConfigVisitor {
            type Value = StyleConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of style properties")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<StyleConfig, A::Error> {
                let mut config = StyleConfig::new();
                while let Some((key, value)) = access.next_entry::<String, StyleValue>()? {
                    config.insert(key, value);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

/// How rejected configuration entries are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Skip rejected entries and keep the previous value (logged at debug level)
    #[default]
    Lenient,
    /// Stop at the first rejected entry and return its error
    Strict,
}

/// Styles that can be configured from a [`StyleConfig`]
pub trait StyleProperties {
    /// Set a single property by its configuration key
    ///
    /// Returns [`Error::UnknownKey`] for keys outside the whitelist and a
    /// validation error for unusable values. A rejected value never
    /// overwrites the stored one. `strictness` governs nested mappings:
    /// lenient skips their bad entries, strict rejects the whole value.
    fn set_property(
        &mut self,
        key: &str,
        value: &StyleValue,
        strictness: Strictness,
    ) -> Result<()>;

    /// Set a single property, rejecting any bad nested entry
    fn set_value(&mut self, key: &str, value: &StyleValue) -> Result<()> {
        self.set_property(key, value, Strictness::Strict)
    }

    /// Apply every entry, skipping unknown keys and rejected values
    fn apply_config(&mut self, config: &StyleConfig) {
        for (key, value) in config.iter() {
            if let Err(err) = self.set_property(normalize_key(key), value, Strictness::Lenient) {
                log::debug!("Ignoring style property '{}': {}", key, err);
            }
        }
    }

    /// Apply every entry with the given strictness
    fn try_apply_config(&mut self, config: &StyleConfig, strictness: Strictness) -> Result<()> {
        match strictness {
            Strictness::Lenient => {
                self.apply_config(config);
                Ok(())
            }
            Strictness::Strict => config.iter().try_for_each(|(key, value)| {
                self.set_property(normalize_key(key), value, Strictness::Strict)
            }),
        }
    }
}

/// Configuration keys may carry a leading underscore
fn normalize_key(key: &str) -> &str {
    key.strip_prefix('_').unwrap_or(key)
}

pub(crate) fn expect_number(key: &str, value: &StyleValue) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| Error::invalid_value(key, "a number", value.to_string()))
}

pub(crate) fn expect_size(key: &str, value: &StyleValue) -> Result<i32> {
    value
        .as_size()
        .ok_or_else(|| Error::invalid_value(key, "a whole number", value.to_string()))
}

pub(crate) fn expect_str<'a>(key: &str, value: &'a StyleValue) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::invalid_value(key, "a string", value.to_string()))
}

pub(crate) fn expect_map<'a>(key: &str, value: &'a StyleValue) -> Result<&'a StyleConfig> {
    value
        .as_map()
        .ok_or_else(|| Error::invalid_value(key, "a map", value.to_string()))
}

/// Colors are stored verbatim; null clears, scalars keep their text form
pub(crate) fn expect_color(key: &str, value: &StyleValue) -> Result<Option<String>> {
    match value {
        StyleValue::Null => Ok(None),
        StyleValue::Str(s) => Ok(Some(s.clone())),
        StyleValue::Bool(b) => Ok(Some(b.to_string())),
        StyleValue::Int(i) => Ok(Some(i.to_string())),
        StyleValue::Float(f) => Ok(Some(f.to_string())),
        other => Err(Error::invalid_value(key, "a color", other.to_string())),
    }
}
