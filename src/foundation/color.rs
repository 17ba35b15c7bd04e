use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::SvgNumber;
use crate::foundation::error::{SeedArtError, SeedArtResult};

/// A CSS-expressible color.
///
/// Generated palettes live in HSL space (saturation and lightness in percent); fixed colors such
/// as white highlights or the export background are plain sRGB bytes. Both carry a straight
/// alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent.
    Hsl {
        /// Hue in degrees.
        h: f64,
        /// Saturation in percent.
        s: f64,
        /// Lightness in percent.
        l: f64,
        /// Straight alpha.
        a: f64,
    },
    /// sRGB bytes.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
        /// Straight alpha.
        a: f64,
    },
}

impl Color {
    /// Opaque white (`#ffffff`).
    pub const WHITE: Self = Self::Rgb {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// Opaque HSL color.
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::Hsl { h, s, l, a: 1.0 }
    }

    /// HSL color with alpha.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::Hsl { h, s, l, a }
    }

    /// Opaque sRGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b, a: 1.0 }
    }

    /// sRGB color with alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgb { r, g, b, a }
    }

    /// Straight alpha in `0..=1`.
    pub fn alpha(self) -> f64 {
        match self {
            Self::Hsl { a, .. } | Self::Rgb { a, .. } => a.clamp(0.0, 1.0),
        }
    }

    /// Convert to straight (non-premultiplied) RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = to_u8(self.alpha());
        match self {
            Self::Rgb { r, g, b, .. } => [r, g, b, a],
            Self::Hsl { h, s, l, .. } => {
                let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
                [to_u8(r), to_u8(g), to_u8(b), a]
            }
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> SeedArtResult<Self> {
        parse_hex(s).map_err(SeedArtError::validation)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hsl { h, s, l, a } if a >= 1.0 => write!(
                f,
                "hsl({}, {}%, {}%)",
                SvgNumber(h),
                SvgNumber(s),
                SvgNumber(l)
            ),
            Self::Hsl { h, s, l, a } => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                SvgNumber(h),
                SvgNumber(s),
                SvgNumber(l),
                SvgNumber(a)
            ),
            Self::Rgb { r, g, b, a } if a >= 1.0 => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Rgb { r, g, b, a } => write!(f, "rgba({r},{g},{b},{})", SvgNumber(a)),
        }
    }
}

impl FromStr for Color {
    type Err = SeedArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(Self::hsla(h, s, l, a)),
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            f64::from(hex_byte(&s[6..8])?) / 255.0,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

// Normalized inputs: saturation and lightness in 0..1.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
