use image::ImageEncoder as _;

use crate::foundation::error::{OgError, OgResult};
use crate::render::paint::VectorDocument;

/// Largest accepted raster edge.
const MAX_DIM: u32 = 16_384;

/// Rasterize `doc` into a `width`x`height` PNG.
///
/// The document is rendered at native resolution when its size matches the target; otherwise it
/// is scaled to fit exactly. Output pixels are straight-alpha RGBA8.
pub fn rasterize(doc: &VectorDocument, width: u32, height: u32) -> OgResult<Vec<u8>> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(OgError::render(format!(
            "raster size {width}x{height} out of range (1..={MAX_DIM})"
        )));
    }

    let opts = usvg::Options {
        fontdb: doc.fontdb.clone(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&doc.svg, &opts)
        .map_err(|e| OgError::render(format!("parse svg document: {e}")))?;

    let rgba = rasterize_tree_to_rgba8(&tree, width, height)?;

    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png)
        .write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| OgError::render(format!("encode png: {e}")))?;
    Ok(png)
}

fn rasterize_tree_to_rgba8(tree: &usvg::Tree, width: u32, height: u32) -> OgResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| OgError::render("failed to allocate svg pixmap"))?;

    let size = tree.size();
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = if sx == 1.0 && sy == 1.0 {
        resvg::tiny_skia::Transform::identity()
    } else {
        resvg::tiny_skia::Transform::from_scale(sx, sy)
    };

    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut out = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
