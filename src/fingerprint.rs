use std::fmt;

use kurbo::PathEl;
use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::generate::artwork::{Artwork, Backdrop};
use crate::generate::shape::Shape;

const XXH3_SEED: u64 = 0x5eed_a47f_1a9e_0b2d;

/// Stable 128-bit digest of an artwork.
///
/// Covers the effective seed, style, size, backdrop, film grain and every shape attribute in list
/// order, so two artworks share a fingerprint exactly when they would render identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Fingerprint `art`.
pub fn fingerprint_artwork(art: &Artwork) -> Fingerprint {
    let mut h = StableHasher::new();
    h.write_str(art.seed().as_str());
    h.write_str(art.style().as_str());
    h.write_f64(art.size().width);
    h.write_f64(art.size().height);
    match art.backdrop() {
        Backdrop::None => h.write_u8(0),
        Backdrop::DotGrid => h.write_u8(1),
        Backdrop::Solid(c) => {
            h.write_u8(2);
            write_color(&mut h, *c);
        }
        Backdrop::Lattice(lattice) => {
            h.write_u8(3);
            write_color(&mut h, lattice.fill);
            write_color(&mut h, lattice.stroke);
            h.write_f64(lattice.spacing);
        }
    }
    match art.grain() {
        None => h.write_u8(0),
        Some(grain) => {
            h.write_u8(1);
            h.write_u32(grain.amount);
            h.write_u32(grain.state);
        }
    }
    write_shapes(&mut h, art.shapes());
    h.finish()
}

/// Fingerprint a bare shape list.
pub fn fingerprint_shapes(shapes: &[Shape]) -> Fingerprint {
    let mut h = StableHasher::new();
    write_shapes(&mut h, shapes);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> Fingerprint {
        let v = self.inner.digest128();
        Fingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_point(h: &mut StableHasher, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_color(h: &mut StableHasher, c: Color) {
    match c {
        Color::Hsl { h: hue, s, l, a } => {
            h.write_u8(0);
            h.write_f64(hue);
            h.write_f64(s);
            h.write_f64(l);
            h.write_f64(a);
        }
        Color::Rgb { r, g, b, a } => {
            h.write_u8(1);
            h.write_bytes(&[r, g, b]);
            h.write_f64(a);
        }
    }
}

fn write_shapes(h: &mut StableHasher, shapes: &[Shape]) {
    h.write_u32(shapes.len() as u32);
    for shape in shapes {
        write_shape(h, shape);
    }
}

fn write_shape(h: &mut StableHasher, shape: &Shape) {
    match shape {
        Shape::Grid(cell) => {
            h.write_u8(0);
            write_point(h, cell.origin);
            h.write_f64(cell.size);
            h.write_u8(cell.glyph.tag());
            h.write_u8(cell.rotation.0);
            write_color(h, cell.color);
            h.write_bool(cell.outline);
        }
        Shape::Tech(line) => {
            h.write_u8(1);
            write_point(h, line.origin);
            h.write_bool(line.vertical);
            h.write_f64(line.length);
            h.write_f64(line.thickness);
            write_color(h, line.color);
            h.write_f64(line.opacity);
        }
        Shape::Node(node) => {
            h.write_u8(2);
            write_point(h, node.center);
            h.write_f64(node.radius);
            write_color(h, node.color);
        }
        Shape::Flow(blob) => {
            h.write_u8(3);
            write_point(h, blob.center);
            h.write_f64(blob.radius);
            write_color(h, blob.color);
            h.write_f64(blob.opacity);
        }
        Shape::Silk(curve) => {
            h.write_u8(4);
            let els = curve.path.elements();
            h.write_u32(els.len() as u32);
            for el in els {
                write_path_el(h, *el);
            }
            write_color(h, curve.fill);
            write_color(h, curve.stroke);
        }
        Shape::Speck(speck) => {
            h.write_u8(5);
            write_point(h, speck.center);
            h.write_f64(speck.radius);
            write_color(h, speck.fill);
        }
        Shape::Tile(tile) => {
            h.write_u8(6);
            write_point(h, tile.center);
            h.write_f64(tile.size);
            h.write_u8(tile.glyph.tag());
            h.write_u8(tile.rotation.0);
            write_color(h, tile.color);
        }
        Shape::Trace(trace) => {
            h.write_u8(7);
            write_point(h, trace.start);
            write_point(h, trace.end);
            h.write_f64(trace.width);
            write_color(h, trace.color);
            h.write_bool(trace.pad);
        }
        Shape::Glow(orb) => {
            h.write_u8(8);
            write_point(h, orb.center);
            h.write_f64(orb.radius);
            write_color(h, orb.color);
        }
    }
}

fn write_path_el(h: &mut StableHasher, el: PathEl) {
    match el {
        PathEl::MoveTo(p) => {
            h.write_u8(0);
            write_point(h, p);
        }
        PathEl::LineTo(p) => {
            h.write_u8(1);
            write_point(h, p);
        }
        PathEl::QuadTo(p1, p2) => {
            h.write_u8(2);
            write_point(h, p1);
            write_point(h, p2);
        }
        PathEl::CurveTo(p1, p2, p3) => {
            h.write_u8(3);
            write_point(h, p1);
            write_point(h, p2);
            write_point(h, p3);
        }
        PathEl::ClosePath => h.write_u8(4),
    }
}

#[cfg(test)]
#[path = "../tests/unit/fingerprint.rs"]
mod tests;
