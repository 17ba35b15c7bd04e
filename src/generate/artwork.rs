use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::{AspectMode, Size, VIEW_BOX};
use crate::foundation::error::SeedArtError;
use crate::generate::palette::Palette;
use crate::generate::shape::Shape;
use crate::generate::wallpaper::{self, LATTICE_SPACING, WallpaperOptions};
use crate::generate::{generative, luxe};
use crate::random::rng::SeededRng;
use crate::random::seed::Seed;

/// Family of compositions an artwork is drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Bauhaus grid, tech circuit or geometric flow on a dark dotted field.
    #[default]
    Generative,
    /// Silk curves and specks on a light backdrop.
    Luxe,
    /// Full-resolution tiles, traces or glows from a color preset, with film grain.
    Wallpaper,
}

impl Style {
    /// Seed used when the caller supplies none at all.
    pub fn default_seed(self) -> &'static str {
        match self {
            Self::Generative | Self::Wallpaper => Seed::DEFAULT,
            Self::Luxe => "luxe",
        }
    }

    /// Build the effective seed for this style.
    ///
    /// Generative replaces an empty string with [`Seed::DEFAULT`]; luxe and wallpaper hash the
    /// empty string as-is, so only an absent seed picks up [`Style::default_seed`].
    pub fn seed(self, raw: &str) -> Seed {
        match self {
            Self::Generative => Seed::new(raw),
            Self::Luxe | Self::Wallpaper => Seed::verbatim(raw),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generative => "generative",
            Self::Luxe => "luxe",
            Self::Wallpaper => "wallpaper",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = SeedArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generative" => Ok(Self::Generative),
            "luxe" => Ok(Self::Luxe),
            "wallpaper" => Ok(Self::Wallpaper),
            other => Err(SeedArtError::validation(format!(
                "unknown style \"{other}\" (expected \"generative\", \"luxe\" or \"wallpaper\")"
            ))),
        }
    }
}

/// High-level layout chosen once per pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    /// 5×5 grid of rotated glyphs.
    Bauhaus,
    /// Bars and junction dots on a 10-unit lattice.
    Circuit,
    /// Overlapping screen-blended circles.
    Flow,
    /// Luxe silk curves and specks.
    Silk,
}

impl CompositionMode {
    /// Snake-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bauhaus => "bauhaus",
            Self::Circuit => "circuit",
            Self::Flow => "flow",
            Self::Silk => "silk",
        }
    }
}

/// What sits behind the shapes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Backdrop {
    /// Nothing; the surface stays transparent.
    None,
    /// Faint dotted pattern on a 20-unit lattice.
    DotGrid,
    /// Solid fill.
    Solid(Color),
    /// Solid fill crossed by hairlines at a fixed spacing.
    Lattice(Lattice),
}

/// Solid fill plus evenly spaced vertical and horizontal hairlines starting at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Lattice {
    /// Fill under the lines.
    pub fill: Color,
    /// Line color.
    pub stroke: Color,
    /// Distance between neighboring lines.
    pub spacing: f64,
}

/// Film grain applied to wallpaper rasters after the shapes are painted.
///
/// The noise continues the artwork's random stream: `state` is where generation left off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FilmGrain {
    /// Strength in `0..=50`; each pixel moves by up to `amount * 1.275` levels either way.
    pub amount: u32,
    /// Stream state after the last shape draw.
    pub state: u32,
}

/// Knobs that change the composition without touching the random stream.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateOptions {
    /// Luxe: drop the backdrop and double curve and speck alpha.
    pub transparent: bool,
    /// Generative and wallpaper: draw the background pattern.
    pub background_grid: bool,
    /// Wallpaper settings; ignored by the other styles.
    pub wallpaper: WallpaperOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            transparent: false,
            background_grid: true,
            wallpaper: WallpaperOptions::default(),
        }
    }
}

/// Result of one generation pass. Immutable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Artwork {
    seed: Seed,
    style: Style,
    mode: CompositionMode,
    size: Size,
    hue: Option<u32>,
    palette: Option<Palette>,
    colors: Vec<Color>,
    backdrop: Backdrop,
    aspect: AspectMode,
    grain: Option<FilmGrain>,
    shapes: Vec<Shape>,
}

impl Artwork {
    /// Effective seed the artwork was generated from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Style the artwork belongs to.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Composition mode picked by the stream.
    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// User-space size: 100×100 for generative and luxe, the pixel size for wallpaper.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Base hue in degrees (generative and luxe).
    pub fn hue(&self) -> Option<u32> {
        self.hue
    }

    /// Three-color palette (generative style only).
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Wallpaper color list, background last; empty for the other styles.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Backdrop behind the shapes.
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Aspect handling for non-square viewports.
    pub fn aspect(&self) -> AspectMode {
        self.aspect
    }

    /// Grain to apply when rasterizing, if any.
    pub fn grain(&self) -> Option<FilmGrain> {
        self.grain
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// Run one generation pass.
///
/// Never fails: any string is a valid seed. See [`Style::seed`] for how empty input is treated.
#[tracing::instrument(skip_all, fields(style = %style, seed = raw_seed))]
pub fn generate(style: Style, raw_seed: &str, opts: &GenerateOptions) -> Artwork {
    let seed = style.seed(raw_seed);
    generate_seeded(style, seed, opts)
}

pub(crate) fn generate_seeded(style: Style, seed: Seed, opts: &GenerateOptions) -> Artwork {
    let mut rng = SeededRng::new(&seed);
    let square = Size::new(VIEW_BOX, VIEW_BOX);

    let art = match style {
        Style::Generative => {
            let composed = generative::compose(&mut rng);
            Artwork {
                seed,
                style,
                mode: composed.mode,
                size: square,
                hue: Some(composed.palette.hue),
                palette: Some(composed.palette),
                colors: Vec::new(),
                backdrop: if opts.background_grid {
                    Backdrop::DotGrid
                } else {
                    Backdrop::None
                },
                aspect: AspectMode::Slice,
                grain: None,
                shapes: composed.shapes,
            }
        }
        Style::Luxe => {
            let composed = luxe::compose(&mut rng, opts.transparent);
            Artwork {
                seed,
                style,
                mode: CompositionMode::Silk,
                size: square,
                hue: Some(composed.base_hue),
                palette: None,
                colors: Vec::new(),
                backdrop: if opts.transparent {
                    Backdrop::None
                } else {
                    Backdrop::Solid(Color::rgb(0xEB, 0xEB, 0xEB))
                },
                aspect: AspectMode::Stretch,
                grain: None,
                shapes: composed.shapes,
            }
        }
        Style::Wallpaper => {
            let wp = &opts.wallpaper;
            let colors = wp.colors.resolve();
            let shapes = wallpaper::compose(&mut rng, wp, &colors);
            let fill = colors.last().copied().unwrap_or(Color::rgb(0x05, 0x05, 0x05));
            Artwork {
                seed,
                style,
                mode: wp.variant.mode(),
                size: wp.size.size(),
                hue: None,
                palette: None,
                backdrop: if opts.background_grid {
                    Backdrop::Lattice(Lattice {
                        fill,
                        stroke: Color::rgba(255, 255, 255, 0.03),
                        spacing: LATTICE_SPACING,
                    })
                } else {
                    Backdrop::Solid(fill)
                },
                colors,
                aspect: AspectMode::Slice,
                grain: (wp.grain > 0).then(|| FilmGrain {
                    amount: wp.grain,
                    state: rng.state(),
                }),
                shapes,
            }
        }
    };

    tracing::debug!(
        seed = %art.seed,
        mode = ?art.mode,
        shapes = art.shapes.len(),
        "generated artwork"
    );
    art
}

#[cfg(test)]
#[path = "../../tests/unit/generate/artwork.rs"]
mod tests;
