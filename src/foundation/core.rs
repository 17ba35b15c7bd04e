use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SeedArtError, SeedArtResult};

pub use kurbo::{BezPath, Point, Size};

/// Side length of the square user-space coordinate system the generative and luxe styles are
/// generated in.
pub const VIEW_BOX: f64 = 100.0;

/// Largest raster edge accepted by the rasterizer and the configuration layer.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// How the view box maps onto a viewport of a different shape (`preserveAspectRatio`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectMode {
    /// `xMidYMid slice`: cover the viewport, cropping overflow.
    Slice,
    /// `none`: stretch to fill the viewport.
    Stretch,
}

impl AspectMode {
    /// The SVG attribute value for this mode.
    pub fn as_svg_attr(self) -> &'static str {
        match self {
            Self::Slice => "xMidYMid slice",
            Self::Stretch => "none",
        }
    }
}

/// Quarter-turn rotation applied to a glyph about its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct QuarterTurns(pub u8);

impl QuarterTurns {
    /// Build from a raw turn count, wrapping into `0..4`.
    pub fn new(turns: u8) -> Self {
        Self(turns % 4)
    }

    /// Rotation in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> u16 {
        u16::from(self.0) * 90
    }
}

/// Output size in pixels.
///
/// Parses from `"1024"` (square), `"1920x1080"`, or one of the named presets `1080p`, `4k`,
/// `8k` and `phone`. JSON accepts the same strings, a bare number, or `{"width", "height"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// 1920×1080.
    pub const FULL_HD: Self = Self::new(1920, 1080);
    /// 3840×2160.
    pub const UHD_4K: Self = Self::new(3840, 2160);
    /// 7680×4320.
    pub const UHD_8K: Self = Self::new(7680, 4320);
    /// 1170×2532, a vertical phone screen.
    pub const PHONE: Self = Self::new(1170, 2532);

    /// Build from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `edge × edge`.
    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "1080p" | "fullhd" => Some(Self::FULL_HD),
            "4k" => Some(Self::UHD_4K),
            "8k" => Some(Self::UHD_8K),
            "phone" => Some(Self::PHONE),
            _ => None,
        }
    }

    /// Both edges as a kurbo size.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Check both edges are within `1..=MAX_RASTER_DIM`.
    pub fn validate(self) -> SeedArtResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if v == 0 || v > MAX_RASTER_DIM {
                return Err(SeedArtError::validation(format!(
                    "resolution {name} must be in 1..={MAX_RASTER_DIM}, got {v}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = SeedArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(preset) = Self::preset(s) {
            return Ok(preset);
        }
        let edge = |v: &str| {
            v.trim().parse::<u32>().map_err(|_| {
                SeedArtError::validation(format!(
                    "invalid resolution \"{s}\" (expected N, WxH, 1080p, 4k, 8k or phone)"
                ))
            })
        };
        match s.split_once(['x', 'X']) {
            Some((w, h)) => Ok(Self::new(edge(w)?, edge(h)?)),
            None => Ok(Self::square(edge(s)?)),
        }
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Edge(u32),
            Text(String),
            Dims { width: u32, height: u32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Edge(edge) => Ok(Self::square(edge)),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Dims { width, height } => Ok(Self::new(width, height)),
        }
    }
}

/// Formats an `f64` for markup: shortest round-trip digits, switching to exponent form
/// (`1e-7`, `1.5e+21`) outside `1e-6..1e21`. Negative zero prints as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgNumber(pub f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            return f.write_str("0");
        }

        let abs = v.abs();
        if (1e-6..1e21).contains(&abs) {
            return write!(f, "{v}");
        }

        let exp = format!("{v:e}");
        match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{mantissa}e+{e}"),
            _ => f.write_str(&exp),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
