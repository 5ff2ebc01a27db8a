//! # wordstyle-core
//!
//! Table styles for word-processing documents.
//!
//! A [`TableStyle`] bundles borders (including the interior dividers
//! between rows and columns), cell margins, shading, alignment and a
//! width with its unit. It is a plain value: document builders fill it
//! in, serializers read it back through its accessors.
//!
//! Styles can be built with typed setters or from a [`StyleConfig`], the
//! key/value form used by document-building APIs. Unknown keys and
//! invalid values are skipped unless [`Strictness::Strict`] is requested.
//!
//! ## Example
//!
//! ```rust
//! use wordstyle_core::prelude::*;
//!
//! let base = StyleConfig::new()
//!     .with("width", 5000)
//!     .with("unit", "pct")
//!     .with("borderSize", 4)
//!     .with("cellMargin", 80);
//! let header = StyleConfig::new().with("bgColor", "D9D9D9");
//!
//! let style = TableStyle::from_config(Some(&base), Some(&header));
//! assert_eq!(style.unit(), WidthUnit::Pct);
//! assert_eq!(style.border_top_size(), Some(4));
//!
//! let first_row = style.first_row().unwrap();
//! assert_eq!(first_row.width(), 5000.0);
//! assert_eq!(first_row.bg_color(), Some("D9D9D9"));
//! assert!(!first_row.has_margin());
//! ```

pub mod config;
pub mod error;
pub mod style;

pub use config::{StyleConfig, StyleProperties, StyleValue, Strictness};
pub use error::{Error, Result};

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderSide, BorderSides, BorderStyle, CellMargins, Shading,
    ShadingPattern, TableAlignment, TableStyle, WidthUnit,
};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::config::{StyleConfig, StyleProperties, StyleValue, Strictness};
    pub use crate::error::{Error, Result};
    pub use crate::style::{
        Alignment, BorderSide, BorderStyle, Shading, ShadingPattern, TableAlignment, TableStyle,
        WidthUnit,
    };
}
