use anyhow::Context as _;

use crate::foundation::color::Color;
use crate::foundation::core::{AspectMode, Resolution};
use crate::foundation::error::{SeedArtError, SeedArtResult};
use crate::generate::artwork::{Artwork, FilmGrain, Style};
use crate::random::rng::{RandomSource, SeededRng};
use crate::render::svg::render_svg;

/// A rendered image as RGBA8 pixels.
///
/// Frames straight out of resvg are **premultiplied alpha**; grained frames are converted to
/// straight alpha first. The flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            demultiply_rgba8_in_place(&mut out);
        }
        out
    }
}

/// Raster output settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Output size in pixels.
    pub size: Resolution,
    /// Fill painted under the artwork; `None` keeps the canvas transparent.
    pub background: Option<Color>,
    /// How the document maps onto an output of a different shape.
    pub fit: AspectMode,
}

impl RasterOptions {
    /// Default edge length of square exports.
    pub const DEFAULT_RESOLUTION: u32 = 1024;

    /// Export defaults for `style`: generative art is flattened onto near-black, luxe and
    /// wallpaper art carry their own backdrop. Wallpapers default to 4K.
    pub fn for_style(style: Style) -> Self {
        let square = Resolution::square(Self::DEFAULT_RESOLUTION);
        match style {
            Style::Generative => Self {
                size: square,
                background: Some(Color::rgb(0x0a, 0x0a, 0x0a)),
                fit: AspectMode::Slice,
            },
            Style::Luxe => Self {
                size: square,
                background: None,
                fit: AspectMode::Stretch,
            },
            Style::Wallpaper => Self {
                size: Resolution::UHD_4K,
                background: None,
                fit: AspectMode::Slice,
            },
        }
    }

    /// Check the size bounds.
    pub fn validate(&self) -> SeedArtResult<()> {
        self.size.validate()
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self::for_style(Style::Generative)
    }
}

/// Rasterize an SVG document to a premultiplied RGBA8 frame of `opts.size`.
///
/// With [`AspectMode::Stretch`] each axis is scaled independently; with [`AspectMode::Slice`]
/// the larger of the two scales is used and the overflow is cropped evenly on both sides.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, opts: &RasterOptions) -> SeedArtResult<FrameRGBA> {
    opts.validate()?;
    let Resolution { width, height } = opts.size;

    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
        .context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SeedArtError::render("failed to allocate svg pixmap"))?;

    if let Some(bg) = opts.background {
        let [r, g, b, a] = bg.to_rgba8();
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let (tw, th) = (tree.size().width(), tree.size().height());
    let sx = (width as f32) / tw;
    let sy = (height as f32) / th;
    if !sx.is_finite() || !sy.is_finite() {
        return Err(SeedArtError::render("svg has invalid width/height"));
    }
    let xform = match opts.fit {
        AspectMode::Stretch => resvg::tiny_skia::Transform::from_scale(sx, sy),
        AspectMode::Slice => {
            let s = sx.max(sy);
            let tx = ((width as f32) - tw * s) / 2.0;
            let ty = ((height as f32) - th * s) / 2.0;
            resvg::tiny_skia::Transform::from_row(s, 0.0, 0.0, s, tx, ty)
        }
    };

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    tracing::debug!(width, height, "rasterized svg");

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Render `art` to SVG and rasterize it, applying the artwork's film grain if it has any.
pub fn rasterize(art: &Artwork, opts: &RasterOptions) -> SeedArtResult<FrameRGBA> {
    let svg = render_svg(art)?;
    rasterize_artwork_svg(art, &svg, opts)
}

/// Rasterize `svg`, already rendered from `art`, and apply the artwork's film grain.
pub(crate) fn rasterize_artwork_svg(
    art: &Artwork,
    svg: &str,
    opts: &RasterOptions,
) -> SeedArtResult<FrameRGBA> {
    let mut frame = rasterize_svg(svg, opts)?;
    if let Some(grain) = art.grain() {
        apply_grain(&mut frame, grain);
    }
    Ok(frame)
}

/// Shift every pixel's RGB by one shared noise draw, continuing the stream at `grain.state`.
///
/// Works on straight alpha; a premultiplied frame is converted first. Channels are clamped to
/// `0..=255` and rounded half to even. Alpha is untouched.
pub(crate) fn apply_grain(frame: &mut FrameRGBA, grain: FilmGrain) {
    if grain.amount == 0 {
        return;
    }
    if frame.premultiplied {
        demultiply_rgba8_in_place(&mut frame.data);
        frame.premultiplied = false;
    }

    let mut rng = SeededRng::from_state(grain.state);
    let strength = f64::from(grain.amount) * 2.55;
    for px in frame.data.chunks_exact_mut(4) {
        let n = (rng.next_f64() - 0.5) * strength;
        for c in &mut px[..3] {
            *c = (f64::from(*c) + n).clamp(0.0, 255.0).round_ties_even() as u8;
        }
    }
    tracing::debug!(amount = grain.amount, "applied film grain");
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
