#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use serde_json::json;
use wordstyle_core::prelude::*;

#[test]
fn test_config_from_json_keeps_order() {
    let config: StyleConfig = serde_json::from_str(
        r#"{"borderTopSize": 12, "borderSize": 4, "width": 50.5, "unit": "pct", "bgColor": null}"#,
    )
    .unwrap();

    let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["borderTopSize", "borderSize", "width", "unit", "bgColor"]);
    assert_eq!(config.get("borderTopSize"), Some(&StyleValue::Int(12)));
    assert_eq!(config.get("width"), Some(&StyleValue::Float(50.5)));
    assert_eq!(config.get("bgColor"), Some(&StyleValue::Null));

    // borderSize comes last and wins for the top edge
    let style = TableStyle::from_config(Some(&config), None);
    assert_eq!(style.border_top_size(), Some(4));
}

#[test]
fn test_nested_shading_from_json() {
    let config: StyleConfig = serde_json::from_value(json!({
        "shading": {"fill": "D9D9D9", "pattern": "pct25", "color": "auto"},
        "align": "end"
    }))
    .unwrap();

    let style = TableStyle::try_from_config(Some(&config), None, Strictness::Strict).unwrap();
    assert_eq!(
        style.shading(),
        Some(
            &Shading::from_fill("D9D9D9")
                .with_color("auto")
                .with_pattern(ShadingPattern::Pct25)
        )
    );
    assert_eq!(style.align(), Some(TableAlignment::End));
}

#[test]
fn test_style_serializes_with_first_row() {
    let base = StyleConfig::new()
        .with("width", 5000)
        .with("unit", "pct")
        .with("cellMargin", 80);
    let first_row = StyleConfig::new().with("bgColor", "FF0000");
    let style = TableStyle::from_config(Some(&base), Some(&first_row));

    let value = serde_json::to_value(&style).unwrap();
    assert_eq!(value["width"], json!(5000.0));
    assert_eq!(value["unit"], json!("pct"));
    assert_eq!(value["cellMargin"]["top"], json!(80));
    assert!(value.get("shading").is_none());
    assert_eq!(value["firstRow"]["shading"]["fill"], json!("FF0000"));
    assert_eq!(value["firstRow"]["cellMargin"]["top"], json!(null));
    assert!(value["firstRow"].get("firstRow").is_none());
}

#[test]
fn test_config_serializes_back() {
    let config = StyleConfig::new()
        .with("width", 10)
        .with("shading", StyleConfig::new().with("fill", "FFFFFF"));
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(text, r#"{"width":10,"shading":{"fill":"FFFFFF"}}"#);
}
