//! Plain-text report of a resolved table style

use std::fmt::Display;
use std::io::{self, Write};

use wordstyle_core::prelude::*;

/// Write every accessor of `style`, then of its header-row style
pub fn write_report<W: Write>(out: &mut W, style: &TableStyle) -> io::Result<()> {
    write_style(out, style, "")?;
    if let Some(first_row) = style.first_row() {
        writeln!(out, "firstRow:")?;
        write_style(out, first_row, "  ")?;
    }
    Ok(())
}

fn write_style<W: Write>(out: &mut W, style: &TableStyle, indent: &str) -> io::Result<()> {
    writeln!(out, "{indent}width: {}", style.width())?;
    writeln!(out, "{indent}unit: {}", style.unit())?;
    writeln!(out, "{indent}borderSize: {}", list(&style.border_size()))?;
    writeln!(out, "{indent}borderColor: {}", list(&style.border_color()))?;
    writeln!(out, "{indent}cellMargin: {}", list(&style.cell_margin()))?;
    writeln!(out, "{indent}hasMargin: {}", style.has_margin())?;
    writeln!(out, "{indent}bgColor: {}", opt(style.bg_color()))?;
    if let Some(shading) = style.shading() {
        writeln!(out, "{indent}shadingColor: {}", opt(shading.color.as_deref()))?;
        writeln!(out, "{indent}shadingPattern: {}", opt(shading.pattern))?;
    }
    writeln!(out, "{indent}align: {}", opt(style.align()))?;
    Ok(())
}

fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn list<T: Display + Copy>(values: &[Option<T>]) -> String {
    let items: Vec<String> = values.iter().map(|v| opt(*v)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_with_first_row() {
        let base = StyleConfig::new()
            .with("width", 5000)
            .with("unit", "pct")
            .with("borderSize", 4)
            .with("cellMargin", 80);
        let first_row = StyleConfig::new().with("bgColor", "FF0000");
        let style = TableStyle::from_config(Some(&base), Some(&first_row));

        let mut out = Vec::new();
        write_report(&mut out, &style).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "\
width: 5000
unit: pct
borderSize: [4, 4, 4, 4, 4, 4]
borderColor: [-, -, -, -, -, -]
cellMargin: [80, 80, 80, 80]
hasMargin: true
bgColor: -
align: -
firstRow:
  width: 5000
  unit: pct
  borderSize: [4, 4, 4, 4, -, -]
  borderColor: [-, -, -, -, -, -]
  cellMargin: [-, -, -, -]
  hasMargin: false
  bgColor: FF0000
  shadingColor: -
  shadingPattern: -
  align: -
"
        );
    }
}
