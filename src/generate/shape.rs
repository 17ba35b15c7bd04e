use serde::Serialize;

use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, QuarterTurns};

/// One drawable primitive.
///
/// Produced once per generation pass and never mutated; the renderer consumes a list of these
/// in order, so position in the list is the z-order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Shape {
    /// A glyph filling one cell of the Bauhaus grid.
    Grid(GridCell),
    /// An axis-aligned bar of the tech circuit.
    Tech(TechLine),
    /// A junction dot placed at the start of a tech line.
    Node(NodeCircle),
    /// A translucent circle of the geometric flow, screen-blended.
    Flow(FlowBlob),
    /// A closed silk curve of the luxe style, multiply-blended.
    Silk(SilkCurve),
    /// A tiny texture dot of the luxe style.
    Speck(Speck),
    /// A glyph centered in one cell of the wallpaper grid.
    Tile(WallTile),
    /// A stroked wallpaper circuit trace, optionally with a pad at its start.
    Trace(CircuitTrace),
    /// A radial glow of the wallpaper flow, screen-blended.
    Glow(GlowOrb),
}

impl Shape {
    /// Stable lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Tech(_) => "tech",
            Self::Node(_) => "node",
            Self::Flow(_) => "flow",
            Self::Silk(_) => "silk",
            Self::Speck(_) => "speck",
            Self::Tile(_) => "tile",
            Self::Trace(_) => "trace",
            Self::Glow(_) => "glow",
        }
    }
}

/// Glyph drawn inside a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridGlyph {
    /// Rounded square.
    Square,
    /// Circle.
    Circle,
    /// Quarter-disc wedge, always filled.
    Arc,
    /// Upward triangle.
    Triangle,
}

impl GridGlyph {
    /// Map a draw in `0..4` onto a glyph.
    pub fn from_index(i: u32) -> Self {
        match i % 4 {
            0 => Self::Square,
            1 => Self::Circle,
            2 => Self::Arc,
            _ => Self::Triangle,
        }
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::Square => 0,
            Self::Circle => 1,
            Self::Arc => 2,
            Self::Triangle => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Bauhaus grid cell.
pub struct GridCell {
    /// Top-left corner of the cell.
    pub origin: Point,
    /// Cell edge length.
    pub size: f64,
    /// Glyph drawn in the cell.
    pub glyph: GridGlyph,
    /// Rotation about the cell center.
    pub rotation: QuarterTurns,
    /// Fill or stroke color.
    pub color: Color,
    /// Stroke only (ignored by [`GridGlyph::Arc`]).
    pub outline: bool,
}

impl GridCell {
    /// Inset between the cell edge and the glyph.
    pub fn padding(&self) -> f64 {
        self.size * 0.1
    }

    /// Edge length of the glyph's bounding square.
    pub fn inner_size(&self) -> f64 {
        self.size - self.padding() * 2.0
    }

    /// Cell center in cell-local coordinates.
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Tech circuit bar.
pub struct TechLine {
    /// Top-left corner of the bar.
    pub origin: Point,
    /// Runs down instead of right.
    pub vertical: bool,
    /// Extent along the run direction.
    pub length: f64,
    /// Extent across the run direction.
    pub thickness: f64,
    /// Fill color.
    pub color: Color,
    /// Fill opacity.
    pub opacity: f64,
}

impl TechLine {
    /// Rendered width.
    pub fn width(&self) -> f64 {
        if self.vertical {
            self.thickness
        } else {
            self.length
        }
    }

    /// Rendered height.
    pub fn height(&self) -> f64 {
        if self.vertical {
            self.length
        } else {
            self.thickness
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Circuit junction.
pub struct NodeCircle {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

impl NodeCircle {
    /// Opacity shared by all nodes.
    pub const OPACITY: f64 = 0.8;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Geometric flow blob.
pub struct FlowBlob {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Fill opacity.
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Luxe silk band: a smooth curve closed along the bottom edge.
pub struct SilkCurve {
    /// Closed outline.
    pub path: BezPath,
    /// Fill color (alpha included).
    pub fill: Color,
    /// Hairline stroke color (alpha included).
    pub stroke: Color,
}

impl SilkCurve {
    /// Stroke width of the hairline outline.
    pub const STROKE_WIDTH: f64 = 0.1;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Luxe texture speck.
pub struct Speck {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill color (alpha included).
    pub fill: Color,
}

/// Glyph drawn on a wallpaper tile, centered on the origin before rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileGlyph {
    /// Filled square.
    Square,
    /// Filled circle.
    Circle,
    /// Triangle pointing up.
    Triangle,
    /// Square with its top-right corner rounded off by a quarter circle.
    Notch,
}

impl TileGlyph {
    /// Map a draw in `0..4` onto a glyph.
    pub fn from_index(i: u32) -> Self {
        match i % 4 {
            0 => Self::Square,
            1 => Self::Circle,
            2 => Self::Triangle,
            _ => Self::Notch,
        }
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::Square => 0,
            Self::Circle => 1,
            Self::Triangle => 2,
            Self::Notch => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Wallpaper grid tile.
pub struct WallTile {
    /// Cell center; the glyph is rotated about this point.
    pub center: Point,
    /// Edge length of the glyph's bounding square.
    pub size: f64,
    /// Glyph drawn on the tile.
    pub glyph: TileGlyph,
    /// Rotation about the center.
    pub rotation: QuarterTurns,
    /// Fill color.
    pub color: Color,
}

impl WallTile {
    /// Opacity shared by all tiles.
    pub const OPACITY: f64 = 0.8;

    /// Half the glyph size.
    pub fn half(&self) -> f64 {
        self.size / 2.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Wallpaper circuit trace.
pub struct CircuitTrace {
    /// Where the trace starts; also the pad center.
    pub start: Point,
    /// Where the trace ends.
    pub end: Point,
    /// Stroke width.
    pub width: f64,
    /// Stroke and pad color.
    pub color: Color,
    /// Draw a filled pad at `start`.
    pub pad: bool,
}

impl CircuitTrace {
    /// Pad radius, twice the stroke width.
    pub fn pad_radius(&self) -> f64 {
        self.width * 2.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Wallpaper flow glow: full color at the center, fading to transparent at the rim.
pub struct GlowOrb {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Center color.
    pub color: Color,
}
