use serde::Serialize;

use crate::foundation::color::Color;

/// Three related colors derived from one hue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Palette {
    /// Base hue in degrees (`0..360`).
    pub hue: u32,
    /// `hsl(hue, 70%, 60%)`.
    pub primary: Color,
    /// Complement: `hsl(hue + 180, 60%, 50%)`.
    pub secondary: Color,
    /// Quarter turn: `hsl(hue + 90, 80%, 60%)`.
    pub accent: Color,
}

impl Palette {
    /// Derive the palette for `hue`, reduced into `0..360` first.
    pub fn from_hue(hue: u32) -> Self {
        let hue = hue % 360;
        Self {
            hue,
            primary: Color::hsl(f64::from(hue), 70.0, 60.0),
            secondary: Color::hsl(f64::from((hue + 180) % 360), 60.0, 50.0),
            accent: Color::hsl(f64::from((hue + 90) % 360), 80.0, 60.0),
        }
    }

    /// Grid color selection from one roll.
    ///
    /// Thresholds are applied in order, so a roll above 0.9 lands on the accent and one below
    /// 0.1 on white.
    pub fn pick(&self, roll: f64) -> Color {
        let mut color = self.primary;
        if roll > 0.6 {
            color = self.secondary;
        }
        if roll > 0.9 {
            color = self.accent;
        }
        if roll < 0.1 {
            color = Color::WHITE;
        }
        color
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/palette.rs"]
mod tests;
