//! Bauhaus grid, tech circuit and geometric flow compositions.
//!
//! Every function here consumes draws from the shared stream in a fixed order. Reordering two
//! draws, even ones that look independent, changes every artwork after that point.

use crate::foundation::color::Color;
use crate::foundation::core::{Point, QuarterTurns, VIEW_BOX};
use crate::generate::artwork::CompositionMode;
use crate::generate::palette::Palette;
use crate::generate::shape::{FlowBlob, GridCell, GridGlyph, NodeCircle, Shape, TechLine};
use crate::random::rng::RandomSource;

pub(crate) const GRID_SIZE: u32 = 5;
pub(crate) const MIN_GRID_SHAPES: usize = 5;
const CIRCUIT_LINES: u32 = 15;
const FLOW_BLOBS: u32 = 8;

pub(crate) struct Composed {
    pub(crate) palette: Palette,
    pub(crate) mode: CompositionMode,
    pub(crate) shapes: Vec<Shape>,
}

pub(crate) fn compose<R: RandomSource>(rng: &mut R) -> Composed {
    let palette = Palette::from_hue(rng.index(360));
    let (mode, shapes) = match rng.index(3) {
        0 => (CompositionMode::Bauhaus, bauhaus_grid(rng, &palette)),
        1 => (CompositionMode::Circuit, tech_circuit(rng, &palette)),
        _ => (CompositionMode::Flow, geometric_flow(rng, &palette)),
    };

    Composed {
        palette,
        mode,
        shapes,
    }
}

pub(crate) fn bauhaus_grid<R: RandomSource>(rng: &mut R, palette: &Palette) -> Vec<Shape> {
    let cell = VIEW_BOX / f64::from(GRID_SIZE);
    let mut shapes = Vec::new();

    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if rng.chance(0.5) {
                shapes.push(grid_cell(rng, palette, x, y, cell));
            }
        }
    }

    if shapes.len() < MIN_GRID_SHAPES {
        for _ in 0..MIN_GRID_SHAPES {
            let x = rng.index(GRID_SIZE);
            let y = rng.index(GRID_SIZE);
            shapes.push(grid_cell(rng, palette, x, y, cell));
        }
    }

    shapes
}

fn grid_cell<R: RandomSource>(
    rng: &mut R,
    palette: &Palette,
    x: u32,
    y: u32,
    cell: f64,
) -> Shape {
    let glyph = GridGlyph::from_index(rng.index(4));
    let rotation = QuarterTurns::new(rng.index(4) as u8);
    let color = palette.pick(rng.next_f64());
    let outline = rng.chance(0.6);

    Shape::Grid(GridCell {
        origin: Point::new(f64::from(x) * cell, f64::from(y) * cell),
        size: cell,
        glyph,
        rotation,
        color,
        outline,
    })
}

pub(crate) fn tech_circuit<R: RandomSource>(rng: &mut R, palette: &Palette) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(CIRCUIT_LINES as usize * 2);

    for _ in 0..CIRCUIT_LINES {
        let vertical = rng.chance(0.5);
        let x = f64::from(rng.index(10) * 10);
        let y = f64::from(rng.index(10) * 10);
        let thickness = rng.spread(0.5, 1.5);
        let length = rng.spread(20.0, 60.0);
        let color = if rng.chance(0.8) {
            Color::WHITE
        } else {
            palette.primary
        };
        let opacity = rng.spread(0.4, 0.6);

        shapes.push(Shape::Tech(TechLine {
            origin: Point::new(x, y),
            vertical,
            length,
            thickness,
            color,
            opacity,
        }));

        if rng.chance(0.4) {
            shapes.push(Shape::Node(NodeCircle {
                center: Point::new(x, y),
                radius: thickness * 2.0,
                color: palette.accent,
            }));
        }
    }

    shapes
}

pub(crate) fn geometric_flow<R: RandomSource>(rng: &mut R, palette: &Palette) -> Vec<Shape> {
    (0..FLOW_BLOBS)
        .map(|i| {
            let cx = rng.next_f64() * VIEW_BOX;
            let cy = rng.next_f64() * VIEW_BOX;
            let radius = rng.spread(10.0, 40.0);
            let color = if i % 2 == 0 {
                palette.primary
            } else {
                palette.secondary
            };
            let opacity = rng.spread(0.3, 0.3);

            Shape::Flow(FlowBlob {
                center: Point::new(cx, cy),
                radius,
                color,
                opacity,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/generate/generative.rs"]
mod tests;
