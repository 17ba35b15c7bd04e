use rayon::prelude::*;

use crate::fingerprint::{Fingerprint, fingerprint_artwork};
use crate::foundation::error::{SeedArtError, SeedArtResult};
use crate::generate::artwork::{Artwork, GenerateOptions, Style, generate};
use crate::render::raster::{FrameRGBA, RasterOptions, rasterize_artwork_svg};
use crate::render::svg::render_svg;

/// Which outputs a render pass produces. SVG markup is always produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markup only.
    #[default]
    Svg,
    /// Markup plus a rasterized frame.
    Png,
}

#[derive(Clone, Debug, Default)]
/// Threading controls for batch rendering.
pub struct RenderThreading {
    /// Render seeds concurrently when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Everything needed to turn a seed into outputs.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Art style.
    pub style: Style,
    /// Generation knobs.
    pub generate: GenerateOptions,
    /// Output kinds.
    pub format: OutputFormat,
    /// Raster settings, used when `format` is [`OutputFormat::Png`].
    pub raster: RasterOptions,
}

impl RenderOpts {
    /// Defaults for `style`. Wallpaper generation and rasterization share the 4K default size.
    pub fn for_style(style: Style) -> Self {
        Self {
            style,
            generate: GenerateOptions::default(),
            format: OutputFormat::default(),
            raster: RasterOptions::for_style(style),
        }
    }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self::for_style(Style::default())
    }
}

/// Outputs of one seed.
#[derive(Clone, Debug)]
pub struct RenderedArt {
    /// The generated artwork.
    pub artwork: Artwork,
    /// Digest of the artwork.
    pub fingerprint: Fingerprint,
    /// Standalone SVG document.
    pub svg: String,
    /// Rasterized frame, when requested.
    pub frame: Option<FrameRGBA>,
}

/// Generate and render a single seed.
///
/// This is the one-shot API: `seed -> Artwork -> SVG [-> FrameRGBA]`.
pub fn render_seed(raw_seed: &str, opts: &RenderOpts) -> SeedArtResult<RenderedArt> {
    let artwork = generate(opts.style, raw_seed, &opts.generate);
    let fingerprint = fingerprint_artwork(&artwork);
    let svg = render_svg(&artwork)?;
    let frame = match opts.format {
        OutputFormat::Svg => None,
        OutputFormat::Png => Some(rasterize_artwork_svg(&artwork, &svg, &opts.raster)?),
    };
    Ok(RenderedArt {
        artwork,
        fingerprint,
        svg,
        frame,
    })
}

/// Render many seeds. Results come back in input order regardless of threading.
#[tracing::instrument(skip(seeds, opts), fields(count = seeds.len()))]
pub fn render_batch<S: AsRef<str> + Sync>(
    seeds: &[S],
    opts: &RenderOpts,
    threading: &RenderThreading,
) -> SeedArtResult<Vec<RenderedArt>> {
    if seeds.is_empty() {
        return Err(SeedArtError::validation("batch must contain at least one seed"));
    }
    opts.raster.validate()?;

    if !threading.parallel {
        return seeds
            .iter()
            .map(|s| render_seed(s.as_ref(), opts))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    let out = pool.install(|| {
        seeds
            .par_iter()
            .map(|s| render_seed(s.as_ref(), opts))
            .collect::<SeedArtResult<Vec<_>>>()
    })?;
    tracing::debug!(rendered = out.len(), "batch complete");
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> SeedArtResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SeedArtError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SeedArtError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
