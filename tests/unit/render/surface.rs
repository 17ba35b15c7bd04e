use super::*;
use crate::generate::artwork::{GenerateOptions, Style, generate};

#[test]
fn recording_surface_sees_shapes_in_list_order() {
    let art = generate(Style::Generative, "hello world", &GenerateOptions::default());
    let mut surface = RecordingSurface::new();
    render_to(&art, &mut surface).unwrap();

    assert!(surface.is_finished());
    assert_eq!(surface.shapes(), art.shapes());
    let cfg = surface.config().unwrap();
    assert_eq!(cfg.id, "hello-world");
    assert_eq!(cfg.size, Size::new(100.0, 100.0));
    assert_eq!(cfg.aspect, AspectMode::Slice);
    assert_eq!(cfg.backdrop, Backdrop::DotGrid);
}

#[test]
fn wallpaper_config_carries_pixel_size() {
    let opts = GenerateOptions {
        wallpaper: crate::generate::wallpaper::WallpaperOptions {
            size: crate::foundation::core::Resolution::PHONE,
            ..Default::default()
        },
        ..GenerateOptions::default()
    };
    let art = generate(Style::Wallpaper, "abc", &opts);
    let cfg = SurfaceConfig::for_artwork(&art);
    assert_eq!(cfg.size, Size::new(1170.0, 2532.0));
    assert!(matches!(cfg.backdrop, Backdrop::Lattice(_)));
}

#[test]
fn begin_resets_previous_recording() {
    let a = generate(Style::Generative, "abc", &GenerateOptions::default());
    let b = generate(Style::Luxe, "abc", &GenerateOptions::default());
    let mut surface = RecordingSurface::new();
    render_to(&a, &mut surface).unwrap();
    render_to(&b, &mut surface).unwrap();
    assert_eq!(surface.shapes(), b.shapes());
}
