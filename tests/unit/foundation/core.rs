use super::*;

#[test]
fn quarter_turns_wrap_and_map_to_degrees() {
    assert_eq!(QuarterTurns::new(0).degrees(), 0);
    assert_eq!(QuarterTurns::new(3).degrees(), 270);
    assert_eq!(QuarterTurns::new(5), QuarterTurns(1));
}

#[test]
fn aspect_mode_svg_values() {
    assert_eq!(AspectMode::Slice.as_svg_attr(), "xMidYMid slice");
    assert_eq!(AspectMode::Stretch.as_svg_attr(), "none");
}

#[test]
fn svg_numbers_switch_to_exponent_form_at_the_edges() {
    assert_eq!(SvgNumber(0.1).to_string(), "0.1");
    assert_eq!(SvgNumber(100.0).to_string(), "100");
    assert_eq!(SvgNumber(48.527450184337795).to_string(), "48.527450184337795");
    assert_eq!(SvgNumber(0.000001).to_string(), "0.000001");
    assert_eq!(SvgNumber(1e-7).to_string(), "1e-7");
    assert_eq!(SvgNumber(-2.5e-9).to_string(), "-2.5e-9");
    assert_eq!(SvgNumber(1e20).to_string(), "100000000000000000000");
    assert_eq!(SvgNumber(1e21).to_string(), "1e+21");
    assert_eq!(SvgNumber(1.5e21).to_string(), "1.5e+21");
    assert_eq!(SvgNumber(-0.0).to_string(), "0");
    assert_eq!(SvgNumber(f64::NAN).to_string(), "NaN");
    assert_eq!(SvgNumber(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn resolution_parses_edges_pairs_and_presets() {
    assert_eq!("1024".parse::<Resolution>().unwrap(), Resolution::square(1024));
    assert_eq!(
        "1920x1080".parse::<Resolution>().unwrap(),
        Resolution::new(1920, 1080)
    );
    assert_eq!("4K".parse::<Resolution>().unwrap(), Resolution::UHD_4K);
    assert_eq!("phone".parse::<Resolution>().unwrap(), Resolution::PHONE);
    assert!("wide".parse::<Resolution>().is_err());
    assert!("10x".parse::<Resolution>().is_err());
    assert_eq!(Resolution::FULL_HD.to_string(), "1920x1080");
}

#[test]
fn resolution_deserializes_every_json_shape() {
    use serde_json::json;

    let r: Resolution = serde_json::from_value(json!(512)).unwrap();
    assert_eq!(r, Resolution::square(512));
    let r: Resolution = serde_json::from_value(json!("8k")).unwrap();
    assert_eq!(r, Resolution::UHD_8K);
    let r: Resolution = serde_json::from_value(json!({"width": 30, "height": 40})).unwrap();
    assert_eq!(r, Resolution::new(30, 40));
    assert!(serde_json::from_value::<Resolution>(json!("huge")).is_err());
}

#[test]
fn resolution_bounds() {
    assert!(Resolution::new(1, MAX_RASTER_DIM).validate().is_ok());
    assert!(Resolution::new(0, 10).validate().is_err());
    assert!(Resolution::new(10, MAX_RASTER_DIM + 1).validate().is_err());
}
