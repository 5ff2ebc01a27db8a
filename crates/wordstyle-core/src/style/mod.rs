//! Table styling types
//!
//! This module contains the types that make up a table style:
//! - [`TableStyle`] - Complete table style, with optional header-row override
//! - [`BorderStyle`] - Border capability (outer sides), with [`BorderSides`]
//! - [`CellMargins`] - Cell padding
//! - [`Shading`] - Background fill
//! - [`Alignment`] - Table placement
//! - [`WidthUnit`] - Interpretation of the table width

mod alignment;
mod border;
mod margin;
mod shading;
mod table;
mod width;

pub use alignment::{Alignment, TableAlignment};
pub use border::{BorderEdge, BorderSide, BorderSides, BorderStyle};
pub use margin::CellMargins;
pub use shading::{Shading, ShadingPattern};
pub use table::TableStyle;
pub use width::WidthUnit;
