use std::fmt;

use serde::Serialize;

use crate::random::rng::hash_seed;

/// The effective seed string of a generation pass.
///
/// A `Seed` is what actually gets hashed, displayed and embedded in ids and file names. Whether
/// empty input is replaced by a fallback is decided per style at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Fallback used by [`Seed::new`].
    pub const DEFAULT: &'static str = "fezcodex";

    /// Build a seed, substituting [`Seed::DEFAULT`] for empty input.
    pub fn new(raw: &str) -> Self {
        Self::with_fallback(raw, Self::DEFAULT)
    }

    /// Build a seed, substituting `fallback` for empty input.
    pub fn with_fallback(raw: &str, fallback: &str) -> Self {
        let s = if raw.is_empty() { fallback } else { raw };
        Self(s.to_owned())
    }

    /// Build a seed from `raw` as-is. The empty string is a valid seed with its own hash.
    pub fn verbatim(raw: &str) -> Self {
        Self(raw.to_owned())
    }

    /// The effective seed string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 32-bit hash state the RNG stream starts from.
    pub fn hash(&self) -> u32 {
        hash_seed(&self.0)
    }

    /// Identifier safe for SVG ids and file names.
    ///
    /// Every UTF-16 code unit that is not an ASCII letter or digit becomes `-`, the rest is
    /// lowercased. Characters outside the BMP therefore map to two dashes.
    pub fn safe_id(&self) -> String {
        self.0
            .encode_utf16()
            .map(|unit| match u8::try_from(unit) {
                Ok(b) if b.is_ascii_alphanumeric() => char::from(b.to_ascii_lowercase()),
                _ => '-',
            })
            .collect()
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/seed.rs"]
mod tests;
