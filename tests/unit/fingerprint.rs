use super::*;
use crate::generate::artwork::{GenerateOptions, Style, generate};

#[test]
fn same_seed_same_fingerprint() {
    let opts = GenerateOptions::default();
    let a = generate(Style::Generative, "fezcodex", &opts);
    let b = generate(Style::Generative, "fezcodex", &opts);
    assert_eq!(fingerprint_artwork(&a), fingerprint_artwork(&b));
    assert_eq!(fingerprint_shapes(a.shapes()), fingerprint_shapes(b.shapes()));
}

#[test]
fn style_and_backdrop_participate() {
    let opts = GenerateOptions::default();
    let gen_art = generate(Style::Generative, "abc", &opts);
    let luxe_art = generate(Style::Luxe, "abc", &opts);
    assert_ne!(fingerprint_artwork(&gen_art), fingerprint_artwork(&luxe_art));

    let no_grid = generate(
        Style::Generative,
        "abc",
        &GenerateOptions {
            background_grid: false,
            ..GenerateOptions::default()
        },
    );
    assert_ne!(fingerprint_artwork(&gen_art), fingerprint_artwork(&no_grid));
    assert_eq!(
        fingerprint_shapes(gen_art.shapes()),
        fingerprint_shapes(no_grid.shapes())
    );
}

#[test]
fn displays_as_32_hex_chars() {
    let fp = Fingerprint { hi: 1, lo: 0xff };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ff");
    let s = fingerprint_shapes(&[]).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn wallpaper_size_and_grain_participate() {
    use crate::foundation::core::Resolution;
    use crate::generate::wallpaper::{WallpaperOptions, WallpaperVariant};

    let opts = |size, grain| GenerateOptions {
        wallpaper: WallpaperOptions {
            variant: WallpaperVariant::Flow,
            size,
            grain,
            ..WallpaperOptions::default()
        },
        ..GenerateOptions::default()
    };
    let base = generate(Style::Wallpaper, "abc", &opts(Resolution::FULL_HD, 15));
    let grainless = generate(Style::Wallpaper, "abc", &opts(Resolution::FULL_HD, 0));
    let phone = generate(Style::Wallpaper, "abc", &opts(Resolution::PHONE, 15));

    assert_eq!(base.shapes(), grainless.shapes());
    assert_ne!(fingerprint_artwork(&base), fingerprint_artwork(&grainless));
    assert_ne!(fingerprint_artwork(&base), fingerprint_artwork(&phone));
    assert_eq!(
        fingerprint_artwork(&base),
        fingerprint_artwork(&generate(Style::Wallpaper, "abc", &opts(Resolution::FULL_HD, 15)))
    );
}
