//! Table style

use crate::config::{
    expect_color, expect_map, expect_number, expect_size, expect_str, Strictness,
    StyleConfig, StyleProperties, StyleValue,
};
use crate::error::{Error, Result};

use super::{
    Alignment, BorderEdge, BorderSide, BorderSides, BorderStyle, CellMargins, Shading,
    TableAlignment, WidthUnit,
};

/// Visual style of a table
///
/// Holds the outer borders, the interior dividers between rows
/// (`inside_h`) and columns (`inside_v`), cell margins, shading,
/// alignment and width. A table style may carry a second style for its
/// header row, see [`TableStyle::first_row`].
///
/// Invalid input never overwrites a stored value: typed setters reject
/// non-finite widths, and the configuration entry points reject values
/// of the wrong kind.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct TableStyle {
    borders: BorderSides,
    border_inside_h: BorderEdge,
    border_inside_v: BorderEdge,
    cell_margin: CellMargins,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    shading: Option<Shading>,
    alignment: Alignment,
    width: f64,
    unit: WidthUnit,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    first_row: Option<Box<TableStyle>>,
}

impl TableStyle {
    /// Create a default table style
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from a base configuration and an optional header-row
    /// configuration
    ///
    /// Unknown keys and rejected values are skipped. The header-row style
    /// starts from the configured base (see [`TableStyle::first_row_template`])
    /// and only exists when `first_row` is given.
    pub fn from_config(base: Option<&StyleConfig>, first_row: Option<&StyleConfig>) -> Self {
        let mut style = Self::new();
        if let Some(base) = base {
            style.apply_config(base);
        }
        if let Some(config) = first_row {
            let mut header = style.first_row_template();
            header.apply_config(config);
            style.first_row = Some(Box::new(header));
        }
        style
    }

    /// Like [`TableStyle::from_config`], reporting rejected entries when
    /// `strictness` is [`Strictness::Strict`]
    pub fn try_from_config(
        base: Option<&StyleConfig>,
        first_row: Option<&StyleConfig>,
        strictness: Strictness,
    ) -> Result<Self> {
        let mut style = Self::new();
        if let Some(base) = base {
            style.try_apply_config(base, strictness)?;
        }
        if let Some(config) = first_row {
            let mut header = style.first_row_template();
            header.try_apply_config(config, strictness)?;
            style.first_row = Some(Box::new(header));
        }
        Ok(style)
    }

    /// Copy of this style suitable as a header-row style
    ///
    /// Outer borders, shading, alignment and width carry over. Cell
    /// margins, interior borders and any nested header-row style are
    /// reset to their defaults.
    pub fn first_row_template(&self) -> Self {
        Self {
            borders: self.borders.clone(),
            shading: self.shading.clone(),
            alignment: self.alignment.clone(),
            width: self.width,
            unit: self.unit,
            border_inside_h: BorderEdge::default(),
            border_inside_v: BorderEdge::default(),
            cell_margin: CellMargins::default(),
            first_row: None,
        }
    }

    /// Header-row style, if one was configured
    pub fn first_row(&self) -> Option<&TableStyle> {
        self.first_row.as_deref()
    }

    // === Width ===

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width, interpreted according to [`TableStyle::unit`]
    ///
    /// NaN and infinite values are ignored.
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        if width.is_finite() {
            self.width = width;
        } else {
            log::debug!("Ignoring non-finite table width {}", width);
        }
        self
    }

    pub fn unit(&self) -> WidthUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: WidthUnit) -> &mut Self {
        self.unit = unit;
        self
    }

    // === Interior borders ===

    pub fn border_inside_h_size(&self) -> Option<i32> {
        self.border_inside_h.size
    }

    pub fn set_border_inside_h_size(&mut self, size: i32) -> &mut Self {
        self.border_inside_h.size = Some(size);
        self
    }

    pub fn border_inside_h_color(&self) -> Option<&str> {
        self.border_inside_h.color.as_deref()
    }

    pub fn set_border_inside_h_color(&mut self, color: Option<&str>) -> &mut Self {
        self.border_inside_h.color = color.map(str::to_string);
        self
    }

    pub fn border_inside_v_size(&self) -> Option<i32> {
        self.border_inside_v.size
    }

    pub fn set_border_inside_v_size(&mut self, size: i32) -> &mut Self {
        self.border_inside_v.size = Some(size);
        self
    }

    pub fn border_inside_v_color(&self) -> Option<&str> {
        self.border_inside_v.color.as_deref()
    }

    pub fn set_border_inside_v_color(&mut self, color: Option<&str>) -> &mut Self {
        self.border_inside_v.color = color.map(str::to_string);
        self
    }

    // === All borders ===

    /// Border sizes in top, left, right, bottom, inside-h, inside-v order
    pub fn border_size(&self) -> [Option<i32>; 6] {
        let [top, left, right, bottom] = self.borders.sizes();
        [
            top,
            left,
            right,
            bottom,
            self.border_inside_h.size,
            self.border_inside_v.size,
        ]
    }

    /// Set the size of every outer and interior border
    pub fn set_border_size(&mut self, size: i32) -> &mut Self {
        for side in BorderSide::ALL {
            self.set_side_size(side, size);
        }
        self.set_border_inside_h_size(size)
            .set_border_inside_v_size(size)
    }

    /// Border colors in top, left, right, bottom, inside-h, inside-v order
    pub fn border_color(&self) -> [Option<&str>; 6] {
        let [top, left, right, bottom] = self.borders.colors();
        [
            top,
            left,
            right,
            bottom,
            self.border_inside_h_color(),
            self.border_inside_v_color(),
        ]
    }

    /// Set (or clear) the color of every outer and interior border
    pub fn set_border_color(&mut self, color: Option<&str>) -> &mut Self {
        for side in BorderSide::ALL {
            self.set_side_color(side, color);
        }
        self.set_border_inside_h_color(color)
            .set_border_inside_v_color(color)
    }

    // === Cell margins ===

    pub fn cell_margin_top(&self) -> Option<i32> {
        self.cell_margin.top
    }

    pub fn set_cell_margin_top(&mut self, margin: i32) -> &mut Self {
        self.cell_margin.top = Some(margin);
        self
    }

    pub fn cell_margin_left(&self) -> Option<i32> {
        self.cell_margin.left
    }

    pub fn set_cell_margin_left(&mut self, margin: i32) -> &mut Self {
        self.cell_margin.left = Some(margin);
        self
    }

    pub fn cell_margin_right(&self) -> Option<i32> {
        self.cell_margin.right
    }

    pub fn set_cell_margin_right(&mut self, margin: i32) -> &mut Self {
        self.cell_margin.right = Some(margin);
        self
    }

    pub fn cell_margin_bottom(&self) -> Option<i32> {
        self.cell_margin.bottom
    }

    pub fn set_cell_margin_bottom(&mut self, margin: i32) -> &mut Self {
        self.cell_margin.bottom = Some(margin);
        self
    }

    /// Cell margins in top, left, right, bottom order
    pub fn cell_margin(&self) -> [Option<i32>; 4] {
        self.cell_margin.to_array()
    }

    /// Set the same margin on all four sides
    pub fn set_cell_margin(&mut self, margin: i32) -> &mut Self {
        self.cell_margin = CellMargins::all(margin);
        self
    }

    /// Check if at least one cell margin is set
    pub fn has_margin(&self) -> bool {
        !self.cell_margin.is_empty()
    }

    // === Shading ===

    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    /// Shading, created empty on first access
    pub fn shading_mut(&mut self) -> &mut Shading {
        self.shading.get_or_insert_with(Shading::default)
    }

    /// Merge the fields set in `shading` into the current shading
    pub fn set_shading(&mut self, shading: Shading) -> &mut Self {
        self.shading_mut().merge(shading);
        self
    }

    /// Background color (the shading fill)
    pub fn bg_color(&self) -> Option<&str> {
        self.shading.as_ref().and_then(|shading| shading.fill.as_deref())
    }

    pub fn set_bg_color<S: Into<String>>(&mut self, color: S) -> &mut Self {
        self.set_shading(Shading::from_fill(color))
    }

    // === Alignment ===

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn align(&self) -> Option<TableAlignment> {
        self.alignment.value()
    }

    pub fn set_align(&mut self, align: TableAlignment) -> &mut Self {
        self.alignment.set_value(align);
        self
    }
}

impl BorderStyle for TableStyle {
    fn borders(&self) -> &BorderSides {
        &self.borders
    }

    fn borders_mut(&mut self) -> &mut BorderSides {
        &mut self.borders
    }
}

impl StyleProperties for TableStyle {
    fn set_property(
        &mut self,
        key: &str,
        value: &StyleValue,
        strictness: Strictness,
    ) -> Result<()> {
        match key {
            "borderTopSize" => {
                self.set_side_size(BorderSide::Top, expect_size(key, value)?);
            }
            "borderLeftSize" => {
                self.set_side_size(BorderSide::Left, expect_size(key, value)?);
            }
            "borderRightSize" => {
                self.set_side_size(BorderSide::Right, expect_size(key, value)?);
            }
            "borderBottomSize" => {
                self.set_side_size(BorderSide::Bottom, expect_size(key, value)?);
            }
            "borderInsideHSize" => {
                self.set_border_inside_h_size(expect_size(key, value)?);
            }
            "borderInsideVSize" => {
                self.set_border_inside_v_size(expect_size(key, value)?);
            }
            "borderSize" => {
                self.set_border_size(expect_size(key, value)?);
            }
            "borderTopColor" => {
                let color = expect_color(key, value)?;
                self.set_side_color(BorderSide::Top, color.as_deref());
            }
            "borderLeftColor" => {
                let color = expect_color(key, value)?;
                self.set_side_color(BorderSide::Left, color.as_deref());
            }
            "borderRightColor" => {
                let color = expect_color(key, value)?;
                self.set_side_color(BorderSide::Right, color.as_deref());
            }
            "borderBottomColor" => {
                let color = expect_color(key, value)?;
                self.set_side_color(BorderSide::Bottom, color.as_deref());
            }
            "borderInsideHColor" => {
                let color = expect_color(key, value)?;
                self.set_border_inside_h_color(color.as_deref());
            }
            "borderInsideVColor" => {
                let color = expect_color(key, value)?;
                self.set_border_inside_v_color(color.as_deref());
            }
            "borderColor" => {
                let color = expect_color(key, value)?;
                self.set_border_color(color.as_deref());
            }
            "cellMarginTop" => {
                self.set_cell_margin_top(expect_size(key, value)?);
            }
            "cellMarginLeft" => {
                self.set_cell_margin_left(expect_size(key, value)?);
            }
            "cellMarginRight" => {
                self.set_cell_margin_right(expect_size(key, value)?);
            }
            "cellMarginBottom" => {
                self.set_cell_margin_bottom(expect_size(key, value)?);
            }
            "cellMargin" => {
                self.set_cell_margin(expect_size(key, value)?);
            }
            "bgColor" => {
                let fill = expect_color(key, value)?;
                self.shading_mut().fill = fill;
            }
            "shading" => {
                // Applied to a copy so a strict failure leaves the shading untouched
                let mut shading = self.shading.clone().unwrap_or_default();
                shading.try_apply_config(expect_map(key, value)?, strictness)?;
                self.shading = Some(shading);
            }
            "align" => {
                self.alignment.set_value_str(expect_str(key, value)?)?;
            }
            "width" => {
                self.set_width(expect_number(key, value)?);
            }
            "unit" => {
                let unit: WidthUnit = expect_str(key, value)?.parse()?;
                self.set_unit(unit);
            }
            _ => return Err(Error::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ShadingPattern;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let style = TableStyle::new();
        assert_eq!(style.width(), 0.0);
        assert_eq!(style.unit(), WidthUnit::Auto);
        assert_eq!(style.border_size(), [None; 6]);
        assert_eq!(style.border_color(), [None; 6]);
        assert_eq!(style.cell_margin(), [None; 4]);
        assert!(!style.has_margin());
        assert_eq!(style.bg_color(), None);
        assert!(style.shading().is_none());
        assert_eq!(style.align(), None);
        assert!(style.first_row().is_none());
    }

    #[test]
    fn test_border_size_order() {
        let mut style = TableStyle::new();
        style
            .set_border_top_size(1)
            .set_border_left_size(2)
            .set_border_right_size(3)
            .set_border_bottom_size(4);
        style.set_border_inside_h_size(5).set_border_inside_v_size(6);

        assert_eq!(
            style.border_size(),
            [Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]
        );
    }

    #[test]
    fn test_set_border_color_clears_everything() {
        let mut style = TableStyle::new();
        style.set_border_color(Some("FF0000"));
        assert_eq!(style.border_color(), [Some("FF0000"); 6]);

        style.set_border_color(None);
        assert_eq!(style.border_color(), [None; 6]);
    }

    #[test]
    fn test_non_finite_width_is_ignored() {
        let mut style = TableStyle::new();
        style.set_width(250.0).set_width(f64::NAN).set_width(f64::INFINITY);
        assert_eq!(style.width(), 250.0);
    }

    #[test]
    fn test_bg_color_creates_shading() {
        let mut style = TableStyle::new();
        style.set_bg_color("00FF00");

        assert_eq!(style.bg_color(), Some("00FF00"));
        assert_eq!(style.shading(), Some(&Shading::from_fill("00FF00")));
    }

    #[test]
    fn test_first_row_template_strips_fields() {
        let mut style = TableStyle::new();
        style
            .set_border_size(4)
            .set_border_color(Some("000000"))
            .set_cell_margin(80)
            .set_width(5000.0)
            .set_unit(WidthUnit::Pct)
            .set_bg_color("EEEEEE");
        style.first_row = Some(Box::new(TableStyle::new()));

        let header = style.first_row_template();
        assert_eq!(
            header.border_size(),
            [Some(4), Some(4), Some(4), Some(4), None, None]
        );
        assert_eq!(header.border_inside_h_color(), None);
        assert_eq!(header.border_inside_v_color(), None);
        assert_eq!(header.border_top_color(), Some("000000"));
        assert_eq!(header.cell_margin(), [None; 4]);
        assert!(!header.has_margin());
        assert!(header.first_row().is_none());
        assert_eq!(header.width(), 5000.0);
        assert_eq!(header.unit(), WidthUnit::Pct);
        assert_eq!(header.bg_color(), Some("EEEEEE"));
    }

    #[test]
    fn test_shading_key_is_all_or_nothing() {
        let mut style = TableStyle::new();
        style.set_bg_color("FFFFFF");

        let bad = StyleConfig::new().with("fill", "000000").with("pattern", "plaid");
        assert_eq!(
            style.set_value("shading", &bad.into()),
            Err(Error::InvalidPattern("plaid".into()))
        );
        assert_eq!(style.bg_color(), Some("FFFFFF"));

        let good = StyleConfig::new().with("color", "FF0000").with("pattern", "pct50");
        style.set_value("shading", &good.into()).unwrap();
        assert_eq!(
            style.shading(),
            Some(
                &Shading::from_fill("FFFFFF")
                    .with_color("FF0000")
                    .with_pattern(ShadingPattern::Pct50)
            )
        );
    }

    #[test]
    fn test_lenient_shading_keeps_good_entries() {
        let config = StyleConfig::new().with(
            "shading",
            StyleConfig::new()
                .with("fill", "FF0000")
                .with("themeFill", "accent1"),
        );

        let style = TableStyle::from_config(Some(&config), None);
        assert_eq!(style.bg_color(), Some("FF0000"));

        assert_eq!(
            TableStyle::try_from_config(Some(&config), None, Strictness::Strict),
            Err(Error::UnknownKey("themeFill".into()))
        );
    }

    #[test]
    fn test_lenient_shading_skips_bad_pattern() {
        let mut style = TableStyle::new();
        let config = StyleConfig::new().with(
            "shading",
            StyleConfig::new()
                .with("pattern", "plaid")
                .with("color", "0000FF"),
        );
        style.apply_config(&config);

        assert_eq!(style.shading(), Some(&Shading::new().with_color("0000FF")));
    }

    #[test]
    fn test_null_bg_color_clears_fill() {
        let mut style = TableStyle::new();
        style.set_bg_color("FFFFFF");
        style.set_value("bgColor", &StyleValue::Null).unwrap();
        assert_eq!(style.bg_color(), None);
    }
}
