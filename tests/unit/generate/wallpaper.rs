use super::*;
use crate::random::rng::SeededRng;
use crate::random::seed::Seed;

fn run(
    variant: WallpaperVariant,
    seed: &str,
    size: Resolution,
    complexity: u32,
) -> (Vec<Shape>, u32) {
    let opts = WallpaperOptions {
        variant,
        complexity,
        size,
        ..WallpaperOptions::default()
    };
    let mut rng = SeededRng::new(&Seed::verbatim(seed));
    let colors = opts.colors.resolve();
    let shapes = compose(&mut rng, &opts, &colors);
    (shapes, rng.state())
}

#[test]
fn bauhaus_tiles_follow_the_draw_order() {
    let (shapes, state) = run(WallpaperVariant::Bauhaus, "fezcodex", Resolution::FULL_HD, 50);
    assert_eq!(shapes.len(), 31);
    assert_eq!(state, 0xad0d_6284);

    let palette = ColorPreset::Default.colors();
    let Shape::Tile(first) = &shapes[0] else {
        panic!("expected a tile, got {}", shapes[0].kind());
    };
    assert_eq!(first.center, Point::new(96.0, 864.0));
    assert_eq!(first.size, 153.60000000000002);
    assert_eq!(first.glyph, TileGlyph::Triangle);
    assert_eq!(first.rotation.degrees(), 180);
    assert_eq!(first.color, palette[0]);

    let Shape::Tile(last) = &shapes[30] else {
        panic!("expected a tile");
    };
    assert_eq!(last.center, Point::new(1824.0, 1056.0));
    assert_eq!(last.glyph, TileGlyph::Notch);
    assert_eq!(last.color, palette[1]);
}

#[test]
fn bauhaus_visits_partial_rows_on_tall_canvases() {
    let opts = WallpaperOptions {
        complexity: 0,
        colors: WallpaperColors::Preset(ColorPreset::Vaporwave),
        size: Resolution::PHONE,
        ..WallpaperOptions::default()
    };
    let mut rng = SeededRng::new(&Seed::verbatim("fezcodex"));
    let shapes = compose(&mut rng, &opts, &opts.colors.resolve());
    assert_eq!(shapes.len(), 28);

    let Shape::Tile(first) = &shapes[0] else {
        panic!("expected a tile");
    };
    assert_eq!(first.center, Point::new(117.0, 1053.0000000000002));
    assert_eq!(first.size, 187.20000000000002);
    assert_eq!(first.glyph, TileGlyph::Triangle);
    assert_eq!(first.color, ColorPreset::Vaporwave.colors()[1]);
}

#[test]
fn circuit_traces_snap_to_lattice_and_scale_with_width() {
    let (shapes, state) = run(WallpaperVariant::Circuit, "fezcodex", Resolution::FULL_HD, 50);
    assert_eq!(shapes.len(), 70);
    assert_eq!(state, 0x1a61_3c9f);

    let pads = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Trace(t) if t.pad))
        .count();
    assert_eq!(pads, 33);

    let Shape::Trace(first) = &shapes[0] else {
        panic!("expected a trace");
    };
    assert_eq!(first.start, Point::new(384.0, 378.0));
    assert_eq!(first.end, Point::new(384.0, 378.0 + 179.44002924486995));
    assert_eq!(first.width, 3.349767366424203);
    assert_eq!(first.pad_radius(), first.width * 2.0);
    assert!(first.pad);
    assert_eq!(first.color, ColorPreset::Default.colors()[1]);
}

#[test]
fn flow_glows_count_and_first_orb() {
    let (shapes, state) = run(WallpaperVariant::Flow, "fezcodex", Resolution::FULL_HD, 50);
    assert_eq!(shapes.len(), 35);
    assert_eq!(state, 0xb6b2_24a0);

    let Shape::Glow(first) = &shapes[0] else {
        panic!("expected a glow");
    };
    assert_eq!(
        first.center,
        Point::new(425.96530616283417, 394.15021299384534)
    );
    assert_eq!(first.radius, 109.58002193365246);
    assert_eq!(first.color, ColorPreset::Default.colors()[0]);
}

#[test]
fn background_color_is_never_drawn_with() {
    let (shapes, _) = run(WallpaperVariant::Circuit, "abc", Resolution::FULL_HD, 100);
    let background = ColorPreset::Default.colors()[2];
    for shape in &shapes {
        let Shape::Trace(t) = shape else {
            panic!("expected a trace");
        };
        assert_ne!(t.color, background);
    }
}

#[test]
fn single_custom_color_is_also_the_draw_color() {
    let only = Color::rgb(1, 2, 3);
    let opts = WallpaperOptions {
        variant: WallpaperVariant::Flow,
        colors: WallpaperColors::Custom(vec![only]),
        size: Resolution::new(200, 100),
        ..WallpaperOptions::default()
    };
    let mut rng = SeededRng::new(&Seed::verbatim("x"));
    let shapes = compose(&mut rng, &opts, &opts.colors.resolve());
    assert!(shapes.iter().all(|s| matches!(s, Shape::Glow(g) if g.color == only)));
}

#[test]
fn presets_parse_and_list_background_last() {
    assert_eq!(
        "pipboy-amber".parse::<ColorPreset>().unwrap(),
        ColorPreset::PipboyAmber
    );
    assert_eq!("CYBER_RED".parse::<ColorPreset>().unwrap(), ColorPreset::CyberRed);
    assert!("sepia".parse::<ColorPreset>().is_err());

    assert_eq!(
        ColorPreset::Default.colors(),
        vec![
            Color::parse_hex("#10b981").unwrap(),
            Color::parse_hex("#3b82f6").unwrap(),
            Color::parse_hex("#050505").unwrap(),
        ]
    );
    assert_eq!(ColorPreset::Vaporwave.colors().len(), 5);
    for preset in ColorPreset::ALL {
        assert_eq!(preset.to_string().parse::<ColorPreset>().unwrap(), preset);
    }
}

#[test]
fn empty_custom_list_resolves_to_default_preset() {
    assert_eq!(
        WallpaperColors::Custom(Vec::new()).resolve(),
        ColorPreset::Default.colors()
    );
}
