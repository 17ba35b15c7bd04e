//! Wallpaper style: full-resolution Bauhaus tiles, circuit traces or flow glows drawn from a
//! fixed color list, finished with film grain at raster time.
//!
//! Coordinates are output pixels, so the composition depends on the chosen resolution as well
//! as the seed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::{Point, QuarterTurns, Resolution};
use crate::foundation::error::SeedArtError;
use crate::generate::artwork::CompositionMode;
use crate::generate::shape::{CircuitTrace, GlowOrb, Shape, TileGlyph, WallTile};
use crate::random::rng::RandomSource;

/// Spacing of the faint background lattice, in pixels.
pub(crate) const LATTICE_SPACING: f64 = 50.0;
/// Width the trace length and glow radius are designed against.
const REFERENCE_WIDTH: f64 = 1920.0;
const CIRCUIT_STEPS: u32 = 20;

/// Named color list. The last color is the background, the others are drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreset {
    /// Emerald and blue on near-black.
    #[default]
    Default,
    /// Red, orange and green.
    Classic,
    /// Yellow and mint on near-black.
    Cyberpunk,
    /// Pastel pink, cyan, green, violet and yellow.
    Vaporwave,
    /// Terminal greens.
    Matrix,
    /// Sky, teal, indigo and ice.
    Ocean,
    /// White through black.
    Mono,
    /// Cyan and blue on navy.
    Forerunner,
    /// Olive greens.
    Unsc,
    /// Amber terminal.
    PipboyAmber,
    /// Green terminal.
    PipboyGreen,
    /// Red and cyan on charcoal.
    CyberRed,
}

impl ColorPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 12] = [
        Self::Default,
        Self::Classic,
        Self::Cyberpunk,
        Self::Vaporwave,
        Self::Matrix,
        Self::Ocean,
        Self::Mono,
        Self::Forerunner,
        Self::Unsc,
        Self::PipboyAmber,
        Self::PipboyGreen,
        Self::CyberRed,
    ];

    /// Snake-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Classic => "classic",
            Self::Cyberpunk => "cyberpunk",
            Self::Vaporwave => "vaporwave",
            Self::Matrix => "matrix",
            Self::Ocean => "ocean",
            Self::Mono => "mono",
            Self::Forerunner => "forerunner",
            Self::Unsc => "unsc",
            Self::PipboyAmber => "pipboy_amber",
            Self::PipboyGreen => "pipboy_green",
            Self::CyberRed => "cyber_red",
        }
    }

    fn hex(self) -> &'static [u32] {
        match self {
            Self::Default => &[0x10b981, 0x3b82f6, 0x050505],
            Self::Classic => &[0xf87171, 0xfb923c, 0x34d399],
            Self::Cyberpunk => &[0xfcee0a, 0x00ff9f, 0x050505, 0xffffff],
            Self::Vaporwave => &[0xff71ce, 0x01cdfe, 0x05ffa1, 0xb967ff, 0xfffb96],
            Self::Matrix => &[0x00ff41, 0x008f11, 0x003b00, 0x0d0208],
            Self::Ocean => &[0x0ea5e9, 0x2dd4bf, 0x1e1b4b, 0xf0f9ff],
            Self::Mono => &[0xffffff, 0xa3a3a3, 0x404040, 0x000000],
            Self::Forerunner => &[0x00f2ff, 0x0066ff, 0x001a33, 0x050505],
            Self::Unsc => &[0x94ff44, 0x3d5c1a, 0x1a240d, 0x050505],
            Self::PipboyAmber => &[0xffb642, 0x8a5d00, 0x211500, 0x050505],
            Self::PipboyGreen => &[0x18e73c, 0x005c00, 0x001a00, 0x050505],
            Self::CyberRed => &[0xff003c, 0x00fff9, 0x1a1a1a, 0x050505],
        }
    }

    /// The preset's colors, background last.
    pub fn colors(self) -> Vec<Color> {
        self.hex()
            .iter()
            .map(|&v| Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
            .collect()
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorPreset {
    type Err = SeedArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| SeedArtError::validation(format!("unknown color preset \"{s}\"")))
    }
}

/// Where the wallpaper's colors come from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WallpaperColors {
    /// A named preset.
    Preset(ColorPreset),
    /// An explicit list, background last.
    Custom(Vec<Color>),
}

impl WallpaperColors {
    /// Colors to draw with, background last. An empty custom list resolves to the default
    /// preset.
    pub fn resolve(&self) -> Vec<Color> {
        match self {
            Self::Preset(p) => p.colors(),
            Self::Custom(list) if list.is_empty() => ColorPreset::Default.colors(),
            Self::Custom(list) => list.clone(),
        }
    }
}

impl Default for WallpaperColors {
    fn default() -> Self {
        Self::Preset(ColorPreset::Default)
    }
}

/// Wallpaper layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperVariant {
    /// Rotated glyphs on a grid sized by complexity.
    #[default]
    Bauhaus,
    /// Stroked traces starting on a 20×20 division of the canvas, some with pads.
    Circuit,
    /// Overlapping radial glows.
    Flow,
}

impl WallpaperVariant {
    /// Lowercase name, as used in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bauhaus => "bauhaus",
            Self::Circuit => "circuit",
            Self::Flow => "flow",
        }
    }

    /// Composition mode recorded on the artwork.
    pub fn mode(self) -> CompositionMode {
        match self {
            Self::Bauhaus => CompositionMode::Bauhaus,
            Self::Circuit => CompositionMode::Circuit,
            Self::Flow => CompositionMode::Flow,
        }
    }
}

impl fmt::Display for WallpaperVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallpaper knobs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WallpaperOptions {
    /// Layout.
    pub variant: WallpaperVariant,
    /// Density in `0..=100`.
    pub complexity: u32,
    /// Color source.
    pub colors: WallpaperColors,
    /// Canvas size in pixels.
    pub size: Resolution,
    /// Film grain strength in `0..=50`; zero disables it.
    pub grain: u32,
}

impl WallpaperOptions {
    /// Largest accepted complexity.
    pub const MAX_COMPLEXITY: u32 = 100;
    /// Largest accepted grain.
    pub const MAX_GRAIN: u32 = 50;
}

impl Default for WallpaperOptions {
    fn default() -> Self {
        Self {
            variant: WallpaperVariant::default(),
            complexity: 50,
            colors: WallpaperColors::default(),
            size: Resolution::UHD_4K,
            grain: 15,
        }
    }
}

pub(crate) fn compose<R: RandomSource>(
    rng: &mut R,
    opts: &WallpaperOptions,
    colors: &[Color],
) -> Vec<Shape> {
    let pick = ColorPicker { colors };
    match opts.variant {
        WallpaperVariant::Bauhaus => bauhaus_tiles(rng, opts, &pick),
        WallpaperVariant::Circuit => circuit_traces(rng, opts, &pick),
        WallpaperVariant::Flow => flow_glows(rng, opts, &pick),
    }
}

// Draws from every color but the last, which is the background.
struct ColorPicker<'a> {
    colors: &'a [Color],
}

impl ColorPicker<'_> {
    fn pick<R: RandomSource>(&self, rng: &mut R) -> Color {
        let drawable = self.colors.len().saturating_sub(1) as u32;
        let i = rng.index(drawable) as usize;
        self.colors.get(i).copied().unwrap_or(Color::WHITE)
    }
}

fn bauhaus_tiles<R: RandomSource>(
    rng: &mut R,
    opts: &WallpaperOptions,
    pick: &ColorPicker<'_>,
) -> Vec<Shape> {
    let w = f64::from(opts.size.width);
    let h = f64::from(opts.size.height);
    let cell_count = 5 + opts.complexity / 10;
    let cell_w = w / f64::from(cell_count);
    // Fractional: a partial last row is still visited.
    let rows = f64::from(cell_count) * (h / w);
    let cell_h = h / rows;

    let mut shapes = Vec::new();
    for x in 0..cell_count {
        let mut y = 0u32;
        while f64::from(y) < rows {
            if rng.chance(0.4) {
                let color = pick.pick(rng);
                let glyph = TileGlyph::from_index(rng.index(4));
                let rotation = QuarterTurns::new(rng.index(4) as u8);
                shapes.push(Shape::Tile(WallTile {
                    center: Point::new(
                        f64::from(x) * cell_w + cell_w / 2.0,
                        f64::from(y) * cell_h + cell_h / 2.0,
                    ),
                    size: cell_w * 0.8,
                    glyph,
                    rotation,
                    color,
                }));
            }
            y += 1;
        }
    }
    shapes
}

fn circuit_traces<R: RandomSource>(
    rng: &mut R,
    opts: &WallpaperOptions,
    pick: &ColorPicker<'_>,
) -> Vec<Shape> {
    let w = f64::from(opts.size.width);
    let h = f64::from(opts.size.height);
    let steps = f64::from(CIRCUIT_STEPS);

    (0..20 + opts.complexity)
        .map(|_| {
            let x = f64::from(rng.index(CIRCUIT_STEPS)) * (w / steps);
            let y = f64::from(rng.index(CIRCUIT_STEPS)) * (h / steps);
            let length = rng.spread(100.0, 400.0) * (w / REFERENCE_WIDTH);
            let horizontal = rng.chance(0.5);
            let color = pick.pick(rng);
            let width = rng.spread(2.0, 4.0);
            let end = if horizontal {
                Point::new(x + length, y)
            } else {
                Point::new(x, y + length)
            };
            let pad = rng.chance(0.5);

            Shape::Trace(CircuitTrace {
                start: Point::new(x, y),
                end,
                width,
                color,
                pad,
            })
        })
        .collect()
}

fn flow_glows<R: RandomSource>(
    rng: &mut R,
    opts: &WallpaperOptions,
    pick: &ColorPicker<'_>,
) -> Vec<Shape> {
    let w = f64::from(opts.size.width);
    let h = f64::from(opts.size.height);

    (0..10 + opts.complexity / 2)
        .map(|_| {
            let x = rng.next_f64() * w;
            let y = rng.next_f64() * h;
            let radius = rng.spread(50.0, 300.0) * (w / REFERENCE_WIDTH);
            let color = pick.pick(rng);
            Shape::Glow(GlowOrb {
                center: Point::new(x, y),
                radius,
                color,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/generate/wallpaper.rs"]
mod tests;
