//! Luxe style: layered silk curves over a light backdrop, dusted with specks.

use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, VIEW_BOX};
use crate::generate::shape::{Shape, SilkCurve, Speck};
use crate::random::rng::RandomSource;

const SEGMENTS: u32 = 4;
const SPECKS: u32 = 50;
const GOLD_HUE: f64 = 45.0;

pub(crate) struct Composed {
    pub(crate) base_hue: u32,
    pub(crate) shapes: Vec<Shape>,
}

pub(crate) fn compose<R: RandomSource>(rng: &mut R, transparent: bool) -> Composed {
    let base_hue = rng.index(360);
    let curve_count = 8 + rng.index(5);
    let alpha_boost = if transparent { 2.0 } else { 1.0 };

    let mut shapes = Vec::with_capacity((curve_count + SPECKS) as usize);
    for i in 0..curve_count {
        shapes.push(silk_curve(rng, i, base_hue, alpha_boost));
    }

    let speck_fill = Color::rgba(0, 0, 0, if transparent { 0.2 } else { 0.1 });
    for _ in 0..SPECKS {
        let cx = rng.next_f64() * VIEW_BOX;
        let cy = rng.next_f64() * VIEW_BOX;
        let radius = rng.next_f64() * 0.3;
        shapes.push(Shape::Speck(Speck {
            center: Point::new(cx, cy),
            radius,
            fill: speck_fill,
        }));
    }

    Composed { base_hue, shapes }
}

fn silk_curve<R: RandomSource>(rng: &mut R, i: u32, base_hue: u32, alpha_boost: f64) -> Shape {
    let start_y = rng.next_f64() * VIEW_BOX;
    let mut points = Vec::with_capacity(SEGMENTS as usize + 1);
    points.push(Point::new(0.0, start_y));
    for j in 1..=SEGMENTS {
        let x = f64::from(j) / f64::from(SEGMENTS) * VIEW_BOX;
        let y = start_y + (rng.next_f64() - 0.5) * 50.0;
        points.push(Point::new(x, y));
    }

    let opacity = rng.spread(0.05, 0.15) * alpha_boost;
    let gold = rng.chance(0.8);
    let (hue, sat, lit) = if gold {
        (GOLD_HUE, 60.0, 60.0)
    } else {
        (f64::from(base_hue), 0.0, 90.0 - f64::from(i) * 5.0)
    };

    Shape::Silk(SilkCurve {
        path: smooth_band(&points),
        fill: Color::hsla(hue, sat, lit, opacity),
        stroke: Color::hsla(hue, sat, lit - 20.0, opacity * 2.0),
    })
}

/// Horizontal-tangent cubic through `points`, closed along the bottom edge of the view box.
fn smooth_band(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(*first);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let mid_x = p0.x + (p1.x - p0.x) / 2.0;
        path.curve_to(Point::new(mid_x, p0.y), Point::new(mid_x, p1.y), p1);
    }
    path.line_to((VIEW_BOX, VIEW_BOX));
    path.line_to((0.0, VIEW_BOX));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/generate/luxe.rs"]
mod tests;
