use std::fmt::Write as _;

use kurbo::PathEl;

use crate::foundation::core::{BezPath, SvgNumber as N};
use crate::foundation::error::{SeedArtError, SeedArtResult};
use crate::generate::artwork::{Artwork, Backdrop, Lattice};
use crate::generate::shape::{
    CircuitTrace, GlowOrb, GridCell, GridGlyph, NodeCircle, Shape, SilkCurve, TileGlyph, WallTile,
};
use crate::render::surface::{Surface, SurfaceConfig, render_to};

const GLYPH_OPACITY: f64 = 0.9;
const OUTLINE_WIDTH: f64 = 1.5;
const DOT_GRID_TILE: f64 = 20.0;
const LATTICE_LINE_WIDTH: f64 = 1.0;

/// Surface that writes a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    out: String,
    id: String,
    glows: usize,
    finished: bool,
}

impl SvgSurface {
    /// Create an empty SVG surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup written so far; a complete document once `finish` has run.
    pub fn markup(&self) -> &str {
        &self.out
    }

    /// Consume the surface, returning the finished document.
    pub fn into_markup(self) -> SeedArtResult<String> {
        if !self.finished {
            return Err(SeedArtError::render("svg surface was not finished"));
        }
        Ok(self.out)
    }

    fn write_backdrop(&mut self, cfg: &SurfaceConfig) -> std::fmt::Result {
        let (w, h) = (N(cfg.size.width), N(cfg.size.height));
        match &cfg.backdrop {
            Backdrop::None => Ok(()),
            Backdrop::DotGrid => {
                let id = &cfg.id;
                write!(
                    self.out,
                    "<defs><pattern id=\"bg-grid-{id}\" width=\"{DOT_GRID_TILE}\" height=\"{DOT_GRID_TILE}\" patternUnits=\"userSpaceOnUse\">\
<circle cx=\"1\" cy=\"1\" r=\"0.5\" fill=\"white\" opacity=\"0.05\"/></pattern></defs>\n"
                )?;
                writeln!(
                    self.out,
                    "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#bg-grid-{id})\"/>"
                )
            }
            Backdrop::Solid(color) => {
                writeln!(self.out, "<rect width=\"{w}\" height=\"{h}\" fill=\"{color}\"/>")
            }
            Backdrop::Lattice(lattice) => write_lattice(&mut self.out, cfg, lattice),
        }
    }

    fn write_shape(&mut self, shape: &Shape) -> std::fmt::Result {
        let out = &mut self.out;
        match shape {
            Shape::Grid(cell) => write_grid_cell(out, cell),
            Shape::Tech(line) => writeln!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                N(line.origin.x),
                N(line.origin.y),
                N(line.width()),
                N(line.height()),
                line.color,
                N(line.opacity)
            ),
            Shape::Node(node) => writeln!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                N(node.center.x),
                N(node.center.y),
                N(node.radius),
                node.color,
                N(NodeCircle::OPACITY)
            ),
            Shape::Flow(blob) => writeln!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\" style=\"mix-blend-mode:screen\"/>",
                N(blob.center.x),
                N(blob.center.y),
                N(blob.radius),
                blob.color,
                N(blob.opacity)
            ),
            Shape::Silk(curve) => {
                out.push_str("<path d=\"");
                write_path_data(out, &curve.path)?;
                writeln!(
                    out,
                    "\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" style=\"mix-blend-mode:multiply\"/>",
                    curve.fill,
                    curve.stroke,
                    N(SilkCurve::STROKE_WIDTH)
                )
            }
            Shape::Speck(speck) => writeln!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                N(speck.center.x),
                N(speck.center.y),
                N(speck.radius),
                speck.fill
            ),
            Shape::Tile(tile) => write_tile(out, tile),
            Shape::Trace(trace) => write_trace(out, trace),
            Shape::Glow(orb) => {
                let gradient = format!("glow-{}-{}", self.id, self.glows);
                self.glows += 1;
                write_glow(out, orb, &gradient)
            }
        }
    }
}

/// Path data with spaces between commands and commas between the points of one command,
/// e.g. `M 0 10 C 5 10, 5 20, 10 20 Z`.
fn write_path_data(out: &mut String, path: &BezPath) -> std::fmt::Result {
    for (i, el) in path.elements().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match *el {
            PathEl::MoveTo(p) => write!(out, "M {} {}", N(p.x), N(p.y))?,
            PathEl::LineTo(p) => write!(out, "L {} {}", N(p.x), N(p.y))?,
            PathEl::QuadTo(a, b) => {
                write!(out, "Q {} {}, {} {}", N(a.x), N(a.y), N(b.x), N(b.y))?
            }
            PathEl::CurveTo(a, b, c) => write!(
                out,
                "C {} {}, {} {}, {} {}",
                N(a.x),
                N(a.y),
                N(b.x),
                N(b.y),
                N(c.x),
                N(c.y)
            )?,
            PathEl::ClosePath => out.push('Z'),
        }
    }
    Ok(())
}

fn write_grid_cell(out: &mut String, cell: &GridCell) -> std::fmt::Result {
    let size = cell.size;
    let c = N(cell.center());
    let p = N(cell.padding());
    let inner = N(cell.inner_size());
    let far = N(size - cell.padding());
    let color = cell.color;
    let fill = if cell.outline {
        "none".to_owned()
    } else {
        color.to_string()
    };
    let stroke_width = N(if cell.outline { OUTLINE_WIDTH } else { 0.0 });

    writeln!(
        out,
        "<g transform=\"translate({}, {}) rotate({}, {c}, {c})\">",
        N(cell.origin.x),
        N(cell.origin.y),
        cell.rotation.degrees()
    )?;
    match cell.glyph {
        GridGlyph::Square => writeln!(
            out,
            "<rect x=\"{p}\" y=\"{p}\" width=\"{inner}\" height=\"{inner}\" fill=\"{fill}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" opacity=\"{GLYPH_OPACITY}\" rx=\"1\"/>"
        )?,
        GridGlyph::Circle => writeln!(
            out,
            "<circle cx=\"{c}\" cy=\"{c}\" r=\"{}\" fill=\"{fill}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" opacity=\"{GLYPH_OPACITY}\"/>",
            N(cell.inner_size() / 2.0)
        )?,
        GridGlyph::Arc => writeln!(
            out,
            "<path d=\"M {p} {p} L {far} {p} A {inner} {inner} 0 0 1 {p} {far} Z\" fill=\"{color}\" opacity=\"{GLYPH_OPACITY}\"/>"
        )?,
        GridGlyph::Triangle => writeln!(
            out,
            "<polygon points=\"{p},{far} {c},{p} {far},{far}\" fill=\"{fill}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" opacity=\"{GLYPH_OPACITY}\"/>"
        )?,
    }
    writeln!(out, "</g>")
}

// One <line> per hairline so crossings paint twice.
fn write_lattice(out: &mut String, cfg: &SurfaceConfig, lattice: &Lattice) -> std::fmt::Result {
    let (w, h) = (cfg.size.width, cfg.size.height);
    writeln!(
        out,
        "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        N(w),
        N(h),
        lattice.fill
    )?;
    if lattice.spacing.is_nan() || lattice.spacing <= 0.0 {
        return Ok(());
    }

    writeln!(
        out,
        "<g stroke=\"{}\" stroke-width=\"{}\">",
        lattice.stroke,
        N(LATTICE_LINE_WIDTH)
    )?;
    let mut x = 0.0;
    while x < w {
        writeln!(
            out,
            "<line x1=\"{}\" y1=\"0\" x2=\"{}\" y2=\"{}\"/>",
            N(x),
            N(x),
            N(h)
        )?;
        x += lattice.spacing;
    }
    let mut y = 0.0;
    while y < h {
        writeln!(
            out,
            "<line x1=\"0\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            N(y),
            N(w),
            N(y)
        )?;
        y += lattice.spacing;
    }
    writeln!(out, "</g>")
}

fn write_tile(out: &mut String, tile: &WallTile) -> std::fmt::Result {
    let h = N(tile.half());
    let neg = N(-tile.half());
    writeln!(
        out,
        "<g transform=\"translate({}, {}) rotate({})\" fill=\"{}\" opacity=\"{}\">",
        N(tile.center.x),
        N(tile.center.y),
        tile.rotation.degrees(),
        tile.color,
        N(WallTile::OPACITY)
    )?;
    match tile.glyph {
        TileGlyph::Square => writeln!(
            out,
            "<rect x=\"{neg}\" y=\"{neg}\" width=\"{}\" height=\"{}\"/>",
            N(tile.size),
            N(tile.size)
        )?,
        TileGlyph::Circle => writeln!(out, "<circle r=\"{h}\"/>")?,
        TileGlyph::Triangle => writeln!(out, "<polygon points=\"{neg},{h} {h},{h} 0,{neg}\"/>")?,
        TileGlyph::Notch => writeln!(
            out,
            "<path d=\"M {neg} {neg} L 0 {neg} A {h} {h} 0 0 1 {h} 0 L {neg} {h} Z\"/>"
        )?,
    }
    writeln!(out, "</g>")
}

fn write_trace(out: &mut String, trace: &CircuitTrace) -> std::fmt::Result {
    writeln!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        N(trace.start.x),
        N(trace.start.y),
        N(trace.end.x),
        N(trace.end.y),
        trace.color,
        N(trace.width)
    )?;
    if trace.pad {
        writeln!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            N(trace.start.x),
            N(trace.start.y),
            N(trace.pad_radius()),
            trace.color
        )?;
    }
    Ok(())
}

// The outer stop keeps the center color at zero opacity so the fade does not darken.
fn write_glow(out: &mut String, orb: &GlowOrb, gradient: &str) -> std::fmt::Result {
    let (cx, cy, r) = (N(orb.center.x), N(orb.center.y), N(orb.radius));
    writeln!(
        out,
        "<defs><radialGradient id=\"{gradient}\" cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" gradientUnits=\"userSpaceOnUse\">\
<stop offset=\"0\" stop-color=\"{color}\"/><stop offset=\"1\" stop-color=\"{color}\" stop-opacity=\"0\"/></radialGradient></defs>",
        color = orb.color
    )?;
    writeln!(
        out,
        "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"url(#{gradient})\" style=\"mix-blend-mode:screen\"/>"
    )
}

fn fmt_err(_: std::fmt::Error) -> SeedArtError {
    SeedArtError::render("failed to write svg markup")
}

impl Surface for SvgSurface {
    fn begin(&mut self, cfg: &SurfaceConfig) -> SeedArtResult<()> {
        self.out.clear();
        self.id.clone_from(&cfg.id);
        self.glows = 0;
        self.finished = false;
        let (w, h) = (N(cfg.size.width), N(cfg.size.height));
        writeln!(
            self.out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"{}\">",
            cfg.aspect.as_svg_attr()
        )
        .map_err(fmt_err)?;
        self.write_backdrop(cfg).map_err(fmt_err)
    }

    fn draw(&mut self, shape: &Shape) -> SeedArtResult<()> {
        self.write_shape(shape).map_err(fmt_err)
    }

    fn finish(&mut self) -> SeedArtResult<()> {
        writeln!(self.out, "</svg>").map_err(fmt_err)?;
        self.finished = true;
        Ok(())
    }
}

/// Render `art` as a standalone SVG document.
pub fn render_svg(art: &Artwork) -> SeedArtResult<String> {
    let mut surface = SvgSurface::new();
    render_to(art, &mut surface)?;
    surface.into_markup()
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
