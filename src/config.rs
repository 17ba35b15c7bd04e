use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Resolution;
use crate::foundation::error::{SeedArtError, SeedArtResult};
use crate::generate::artwork::{GenerateOptions, Style};
use crate::generate::wallpaper::{ColorPreset, WallpaperColors, WallpaperOptions, WallpaperVariant};
use crate::render::pipeline::{OutputFormat, RenderOpts};
use crate::render::raster::RasterOptions;

/// JSON-facing description of one artwork render.
///
/// Every field is optional in the document; missing fields take the defaults of the chosen
/// style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtConfig {
    /// Raw seed; absent means the style's default seed. An empty string is passed through to
    /// the style unchanged.
    pub seed: Option<String>,
    /// Art style.
    pub style: Style,
    /// Output size; absent means the style default (1024 square, 4K for wallpaper).
    /// Wallpapers are also generated at this size.
    pub resolution: Option<Resolution>,
    /// Raster background; `None` uses the style default.
    pub background: Option<Color>,
    /// Luxe: transparent variant.
    pub transparent: bool,
    /// Generative and wallpaper: background pattern.
    pub background_grid: bool,
    /// Wallpaper: layout.
    pub variant: WallpaperVariant,
    /// Wallpaper: density in `0..=100`.
    pub complexity: u32,
    /// Wallpaper: named color list, used unless `colors` is set.
    pub preset: ColorPreset,
    /// Wallpaper: explicit color list, background last.
    pub colors: Option<Vec<Color>>,
    /// Wallpaper: film grain in `0..=50`.
    pub grain: u32,
}

impl Default for ArtConfig {
    fn default() -> Self {
        let wallpaper = WallpaperOptions::default();
        Self {
            seed: None,
            style: Style::default(),
            resolution: None,
            background: None,
            transparent: false,
            background_grid: true,
            variant: wallpaper.variant,
            complexity: wallpaper.complexity,
            preset: ColorPreset::default(),
            colors: None,
            grain: wallpaper.grain,
        }
    }
}

impl ArtConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SeedArtResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SeedArtError::serde(format!("parse art config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SeedArtResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SeedArtError::validation(format!("open art config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Seed string handed to the generator.
    pub fn effective_seed(&self) -> &str {
        self.seed.as_deref().unwrap_or(self.style.default_seed())
    }

    /// Output size after applying the style default.
    pub fn output_size(&self) -> Resolution {
        self.resolution
            .unwrap_or_else(|| RasterOptions::for_style(self.style).size)
    }

    /// Check value ranges and style-specific combinations.
    pub fn validate(&self) -> SeedArtResult<()> {
        self.raster_options().validate()?;
        if self.transparent && self.style != Style::Luxe {
            return Err(SeedArtError::validation(
                "'transparent' is only supported by the luxe style",
            ));
        }
        if self.complexity > WallpaperOptions::MAX_COMPLEXITY {
            return Err(SeedArtError::validation(format!(
                "complexity must be in 0..={}, got {}",
                WallpaperOptions::MAX_COMPLEXITY,
                self.complexity
            )));
        }
        if self.grain > WallpaperOptions::MAX_GRAIN {
            return Err(SeedArtError::validation(format!(
                "grain must be in 0..={}, got {}",
                WallpaperOptions::MAX_GRAIN,
                self.grain
            )));
        }
        if let Some(colors) = &self.colors
            && colors.is_empty()
        {
            return Err(SeedArtError::validation(
                "'colors' must list at least one color",
            ));
        }
        Ok(())
    }

    /// Wallpaper knobs derived from this config.
    pub fn wallpaper_options(&self) -> WallpaperOptions {
        WallpaperOptions {
            variant: self.variant,
            complexity: self.complexity,
            colors: match &self.colors {
                Some(list) => WallpaperColors::Custom(list.clone()),
                None => WallpaperColors::Preset(self.preset),
            },
            size: self.output_size(),
            grain: self.grain,
        }
    }

    /// Generation knobs derived from this config.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            transparent: self.transparent,
            background_grid: self.background_grid,
            wallpaper: self.wallpaper_options(),
        }
    }

    /// Raster settings derived from this config.
    pub fn raster_options(&self) -> RasterOptions {
        let defaults = RasterOptions::for_style(self.style);
        RasterOptions {
            size: self.output_size(),
            background: self.background.or(defaults.background),
            fit: defaults.fit,
        }
    }

    /// Full render options for `format`.
    pub fn render_opts(&self, format: OutputFormat) -> RenderOpts {
        RenderOpts {
            style: self.style,
            generate: self.generate_options(),
            format,
            raster: self.raster_options(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
