use super::*;

#[test]
fn empty_seed_matches_style_default() {
    let opts = GenerateOptions::default();
    assert_eq!(
        generate(Style::Generative, "", &opts),
        generate(Style::Generative, "fezcodex", &opts)
    );
}

#[test]
fn luxe_and_wallpaper_hash_empty_seed_verbatim() {
    let opts = GenerateOptions::default();
    let empty = generate(Style::Luxe, "", &opts);
    assert_eq!(empty.seed().as_str(), "");
    assert_eq!(empty.hue(), Some(19));
    assert_ne!(empty, generate(Style::Luxe, "luxe", &opts));
    assert_eq!(generate(Style::Luxe, "luxe", &opts).hue(), Some(234));

    let wallpaper = generate(Style::Wallpaper, "", &opts);
    assert_eq!(wallpaper.seed(), &Seed::verbatim(""));
    assert_ne!(
        wallpaper.shapes(),
        generate(Style::Wallpaper, "fezcodex", &opts).shapes()
    );
    assert_eq!(Style::Luxe.default_seed(), "luxe");
    assert_eq!(Style::Wallpaper.default_seed(), "fezcodex");
}

#[test]
fn generative_default_seed_summary() {
    let art = generate(Style::Generative, "fezcodex", &GenerateOptions::default());
    assert_eq!(art.seed().as_str(), "fezcodex");
    assert_eq!(art.style(), Style::Generative);
    assert_eq!(art.mode(), CompositionMode::Circuit);
    assert_eq!(art.hue(), Some(79));
    assert_eq!(art.size(), Size::new(100.0, 100.0));
    assert!(art.colors().is_empty());
    assert!(art.grain().is_none());
    assert_eq!(art.aspect(), AspectMode::Slice);
    assert_eq!(art.backdrop(), &Backdrop::DotGrid);
    assert_eq!(art.shapes().len(), 23);

    let palette = art.palette().unwrap();
    assert_eq!(palette.primary.to_string(), "hsl(79, 70%, 60%)");
    assert_eq!(palette.secondary.to_string(), "hsl(259, 60%, 50%)");
    assert_eq!(palette.accent.to_string(), "hsl(169, 80%, 60%)");
}

#[test]
fn known_seeds_pick_known_modes() {
    let opts = GenerateOptions::default();
    let cases = [
        ("luxe", CompositionMode::Bauhaus, 9),
        ("hello world", CompositionMode::Bauhaus, 16),
        ("a", CompositionMode::Flow, 8),
        ("abc", CompositionMode::Circuit, 25),
    ];
    for (seed, mode, count) in cases {
        let art = generate(Style::Generative, seed, &opts);
        assert_eq!(art.mode(), mode, "{seed}");
        assert_eq!(art.shapes().len(), count, "{seed}");
    }
}

#[test]
fn options_only_change_backdrop() {
    let with_grid = generate(Style::Generative, "abc", &GenerateOptions::default());
    let without = generate(
        Style::Generative,
        "abc",
        &GenerateOptions {
            background_grid: false,
            ..GenerateOptions::default()
        },
    );
    assert_eq!(with_grid.shapes(), without.shapes());
    assert_eq!(without.backdrop(), &Backdrop::None);
}

#[test]
fn luxe_backdrop_follows_transparency() {
    let opaque = generate(Style::Luxe, "luxe", &GenerateOptions::default());
    assert_eq!(opaque.mode(), CompositionMode::Silk);
    assert_eq!(opaque.aspect(), AspectMode::Stretch);
    assert!(opaque.palette().is_none());
    assert_eq!(
        opaque.backdrop(),
        &Backdrop::Solid(Color::parse_hex("#EBEBEB").unwrap())
    );

    let clear = generate(
        Style::Luxe,
        "luxe",
        &GenerateOptions {
            transparent: true,
            ..GenerateOptions::default()
        },
    );
    assert_eq!(clear.backdrop(), &Backdrop::None);
}

#[test]
fn style_parses_and_displays() {
    assert_eq!("luxe".parse::<Style>().unwrap(), Style::Luxe);
    assert_eq!(" Generative ".parse::<Style>().unwrap(), Style::Generative);
    assert_eq!("WALLPAPER".parse::<Style>().unwrap(), Style::Wallpaper);
    assert!("pastel".parse::<Style>().is_err());
    assert_eq!(Style::Luxe.to_string(), "luxe");
    assert_eq!(Style::default(), Style::Generative);
}

#[test]
fn wallpaper_uses_pixel_space_and_preset_colors() {
    let opts = GenerateOptions {
        wallpaper: WallpaperOptions {
            size: crate::foundation::core::Resolution::FULL_HD,
            ..WallpaperOptions::default()
        },
        ..GenerateOptions::default()
    };
    let art = generate(Style::Wallpaper, "fezcodex", &opts);
    assert_eq!(art.mode(), CompositionMode::Bauhaus);
    assert_eq!(art.size(), Size::new(1920.0, 1080.0));
    assert_eq!(art.hue(), None);
    assert_eq!(art.colors().len(), 3);
    assert_eq!(art.shapes().len(), 31);
    assert_eq!(
        art.backdrop(),
        &Backdrop::Lattice(Lattice {
            fill: Color::rgb(0x05, 0x05, 0x05),
            stroke: Color::rgba(255, 255, 255, 0.03),
            spacing: 50.0,
        })
    );
    assert_eq!(
        art.grain(),
        Some(FilmGrain {
            amount: 15,
            state: 0xad0d_6284,
        })
    );
}

#[test]
fn wallpaper_without_grid_or_grain() {
    let opts = GenerateOptions {
        background_grid: false,
        wallpaper: WallpaperOptions {
            grain: 0,
            ..WallpaperOptions::default()
        },
        ..GenerateOptions::default()
    };
    let art = generate(Style::Wallpaper, "fezcodex", &opts);
    assert_eq!(art.backdrop(), &Backdrop::Solid(Color::rgb(0x05, 0x05, 0x05)));
    assert!(art.grain().is_none());
}
