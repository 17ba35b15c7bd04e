use crate::foundation::core::{AspectMode, Size};
use crate::foundation::error::SeedArtResult;
use crate::generate::artwork::{Artwork, Backdrop};
use crate::generate::shape::Shape;

/// Per-artwork settings handed to a [`Surface`] before any shape is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Sanitized seed, used to namespace element ids.
    pub id: String,
    /// User-space width and height; also the document's intrinsic size.
    pub size: Size,
    /// Viewport aspect handling.
    pub aspect: AspectMode,
    /// What to paint before the first shape.
    pub backdrop: Backdrop,
}

impl SurfaceConfig {
    /// Settings for drawing `art`.
    pub fn for_artwork(art: &Artwork) -> Self {
        Self {
            id: art.seed().safe_id(),
            size: art.size(),
            aspect: art.aspect(),
            backdrop: art.backdrop().clone(),
        }
    }
}

/// Drawing target for a shape list.
///
/// Ordering contract: `draw` is called once per shape, in list order, between one `begin` and
/// one `finish`. Later shapes paint over earlier ones.
pub trait Surface {
    /// Called once before any shape is drawn.
    fn begin(&mut self, cfg: &SurfaceConfig) -> SeedArtResult<()>;
    /// Draw one shape on top of everything drawn so far.
    fn draw(&mut self, shape: &Shape) -> SeedArtResult<()>;
    /// Called once after the last shape.
    fn finish(&mut self) -> SeedArtResult<()>;
}

/// Draw every shape of `art` onto `surface`, preserving list order.
pub fn render_to(art: &Artwork, surface: &mut dyn Surface) -> SeedArtResult<()> {
    surface.begin(&SurfaceConfig::for_artwork(art))?;
    for shape in art.shapes() {
        surface.draw(shape)?;
    }
    surface.finish()
}

/// Surface that records what it was asked to draw. Useful for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    cfg: Option<SurfaceConfig>,
    shapes: Vec<Shape>,
    finished: bool,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SurfaceConfig> {
        self.cfg.as_ref()
    }

    /// Shapes in the order they were drawn.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Whether `finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Surface for RecordingSurface {
    fn begin(&mut self, cfg: &SurfaceConfig) -> SeedArtResult<()> {
        self.cfg = Some(cfg.clone());
        self.shapes.clear();
        self.finished = false;
        Ok(())
    }

    fn draw(&mut self, shape: &Shape) -> SeedArtResult<()> {
        self.shapes.push(shape.clone());
        Ok(())
    }

    fn finish(&mut self) -> SeedArtResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
