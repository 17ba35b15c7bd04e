//! seedart turns a string seed into reproducible generative art.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: `&str -> Seed` (generative replaces empty input with `fezcodex`; luxe and
//!    wallpaper hash it as given)
//! 2. **Generate**: `Seed -> Artwork` (one composition mode, an ordered list of [`Shape`]s)
//! 3. **Render**: `Artwork -> SVG` via a [`Surface`], list order is z-order
//! 4. **Rasterize** (optional): `SVG -> FrameRGBA -> PNG`, plus film grain for wallpapers
//!
//! The guarantee everything else rests on: identical seed ⇒ identical hash state sequence ⇒
//! identical shape list ⇒ identical SVG bytes and pixels. All 32-bit mixing uses explicit
//! wrapping arithmetic so the stream matches the published artworks bit for bit.
//!
//! ```
//! use seedart::{GenerateOptions, Style, generate, render_svg};
//!
//! let art = generate(Style::Generative, "fezcodex", &GenerateOptions::default());
//! let svg = render_svg(&art).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
#![forbid(unsafe_code)]

mod config;
mod export;
mod fingerprint;
mod foundation;
mod generate;
mod random;
mod render;

pub use config::ArtConfig;
pub use export::{
    batch_file_names, download_file_name, encode_png, ensure_parent_dir, write_png, write_svg,
};
pub use fingerprint::{Fingerprint, fingerprint_artwork, fingerprint_shapes};
pub use foundation::color::Color;
pub use foundation::core::{
    AspectMode, BezPath, MAX_RASTER_DIM, Point, QuarterTurns, Resolution, Size, SvgNumber,
    VIEW_BOX,
};
pub use foundation::error::{SeedArtError, SeedArtResult};
pub use generate::artwork::{
    Artwork, Backdrop, CompositionMode, FilmGrain, GenerateOptions, Lattice, Style, generate,
};
pub use generate::palette::Palette;
pub use generate::shape::{
    CircuitTrace, FlowBlob, GlowOrb, GridCell, GridGlyph, NodeCircle, Shape, SilkCurve, Speck,
    TechLine, TileGlyph, WallTile,
};
pub use generate::wallpaper::{
    ColorPreset, WallpaperColors, WallpaperOptions, WallpaperVariant,
};
pub use random::rng::{HASH_INIT, RandomSource, SeededRng, hash_seed};
pub use random::seed::Seed;
pub use render::pipeline::{
    OutputFormat, RenderOpts, RenderThreading, RenderedArt, render_batch, render_seed,
};
pub use render::raster::{FrameRGBA, RasterOptions, rasterize, rasterize_svg};
pub use render::surface::{RecordingSurface, Surface, SurfaceConfig, render_to};
pub use render::svg::{SvgSurface, render_svg};
