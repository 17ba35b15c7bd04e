use super::*;
use serde_json::json;

#[test]
fn formats_as_css() {
    assert_eq!(Color::hsl(79.0, 70.0, 60.0).to_string(), "hsl(79, 70%, 60%)");
    assert_eq!(
        Color::hsla(45.0, 60.0, 60.0, 0.25).to_string(),
        "hsla(45, 60%, 60%, 0.25)"
    );
    assert_eq!(Color::WHITE.to_string(), "#ffffff");
    assert_eq!(Color::rgba(0, 0, 0, 0.1).to_string(), "rgba(0,0,0,0.1)");
}

#[test]
fn tiny_components_use_exponent_form() {
    assert_eq!(
        Color::hsla(45.0, 60.0, 60.0, 1e-7).to_string(),
        "hsla(45, 60%, 60%, 1e-7)"
    );
    assert_eq!(Color::rgba(0, 0, 0, 2.5e-8).to_string(), "rgba(0,0,0,2.5e-8)");
    assert_eq!(Color::hsl(-0.0, 0.0, 90.0).to_string(), "hsl(0, 0%, 90%)");
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#0a0a0a")).unwrap();
    assert_eq!(c, Color::rgb(10, 10, 10));

    let c = Color::parse_hex("EBEBEB").unwrap();
    assert_eq!(c.to_rgba8(), [0xeb, 0xeb, 0xeb, 255]);

    let c: Color = "#0000ff80".parse().unwrap();
    assert_eq!(c.to_rgba8(), [0, 0, 255, 128]);
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::parse_hex("#fff").is_err());
    assert!(Color::parse_hex("#gg0000").is_err());
    assert!(serde_json::from_value::<Color>(json!("nope")).is_err());
}

#[test]
fn parses_objects() {
    let c: Color = serde_json::from_value(json!({"r": 255, "g": 0, "b": 0})).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!({"h": 120.0, "s": 100.0, "l": 50.0})).unwrap();
    assert_eq!(c.to_rgba8(), [0, 255, 0, 255]);
}

#[test]
fn hsl_conversion_hits_primaries_and_greys() {
    assert_eq!(Color::hsl(0.0, 100.0, 50.0).to_rgba8(), [255, 0, 0, 255]);
    assert_eq!(Color::hsl(240.0, 100.0, 50.0).to_rgba8(), [0, 0, 255, 255]);
    assert_eq!(Color::hsl(200.0, 0.0, 100.0).to_rgba8(), [255, 255, 255, 255]);
}

#[test]
fn serializes_as_css_string() {
    let v = serde_json::to_value(Color::hsl(10.0, 70.0, 60.0)).unwrap();
    assert_eq!(v, json!("hsl(10, 70%, 60%)"));
}
