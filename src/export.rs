use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::{SeedArtError, SeedArtResult};
use crate::generate::artwork::{Artwork, Style};
use crate::render::raster::FrameRGBA;

/// Suggested file name for an exported artwork.
///
/// `fezcodex-art-my-post.png` and `fezcodex-luxe-my-post.svg` for the square styles;
/// `fezcodex-wallpaper-bauhaus-my-post-3840x2160.png` for wallpapers.
pub fn download_file_name(art: &Artwork, extension: &str) -> String {
    let id = art.seed().safe_id();
    match art.style() {
        Style::Generative => format!("fezcodex-art-{id}.{extension}"),
        Style::Luxe => format!("fezcodex-luxe-{id}.{extension}"),
        Style::Wallpaper => format!(
            "fezcodex-wallpaper-{}-{id}-{}x{}.{extension}",
            art.mode().as_str(),
            art.size().width as u32,
            art.size().height as u32
        ),
    }
}

/// File names for a batch, in input order.
///
/// Distinct seeds can share a safe id (`"My Post"` and `"my-post"`); such a batch is rejected
/// before anything is written. Repeats of the same seed produce identical files and are allowed.
pub fn batch_file_names<'a, I>(arts: I, extension: &str) -> SeedArtResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Artwork>,
{
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::new();
    for art in arts {
        let name = download_file_name(art, extension);
        let seed = art.seed().as_str();
        if let Some(&other) = owners.get(&name)
            && other != seed
        {
            return Err(SeedArtError::validation(format!(
                "seeds \"{other}\" and \"{seed}\" would both be written to \"{name}\""
            )));
        }
        owners.insert(name.clone(), seed);
        names.push(name);
    }
    Ok(names)
}

/// Encode a frame as PNG bytes (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> SeedArtResult<Vec<u8>> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(SeedArtError::render(format!(
            "frame buffer is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let rgba = frame.to_straight_rgba8();
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}

/// Encode `frame` and write it to `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> SeedArtResult<()> {
    let bytes = encode_png(frame)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write SVG markup to `path`, creating parent directories.
pub fn write_svg(path: &Path, svg: &str) -> SeedArtResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
    Ok(())
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> SeedArtResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
