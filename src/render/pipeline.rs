use rayon::prelude::*;

use crate::assets::fonts::FontAsset;
use crate::assets::text::TextLayoutEngine;
use crate::foundation::core::Canvas;
use crate::foundation::error::OgResult;
use crate::layout::build::build_layout;
use crate::layout::solver::solve_layout;
use crate::model::{Branding, PagePreviewRequest};
use crate::render::paint::paint;
use crate::render::raster::rasterize;
use crate::routes::PreviewRoute;

/// Response content type of every preview image.
pub const CONTENT_TYPE: &str = "image/png";
/// Preview images never change for a given URL.
pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Final PNG plus the metadata it is served with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    /// Encoded PNG.
    pub png: Vec<u8>,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl RenderedImage {
    /// Always `image/png`.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Always `public, max-age=31536000, immutable`.
    pub fn cache_control(&self) -> &'static str {
        CACHE_CONTROL
    }

    /// Response headers as `(name, value)` pairs.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [
            ("Content-Type", CONTENT_TYPE),
            ("Cache-Control", CACHE_CONTROL),
        ]
    }
}

/// Render one preview card.
///
/// Pipeline:
/// 1. [`Theme::palette`](crate::Theme::palette)
/// 2. [`build_layout`](crate::build_layout)
/// 3. [`solve_layout`](crate::solve_layout)
/// 4. [`paint`](crate::paint)
/// 5. [`rasterize`](crate::rasterize)
///
/// Identical inputs produce byte-identical PNGs.
#[tracing::instrument(
    skip_all,
    fields(theme = %request.theme, title_len = request.title.len())
)]
pub fn render_preview(
    request: &PagePreviewRequest,
    fonts: &FontAsset,
    branding: &Branding,
) -> OgResult<RenderedImage> {
    let canvas = Canvas::OG;
    let palette = request.theme.palette();

    let root = build_layout(request, palette, branding);
    let mut engine = TextLayoutEngine::new(fonts)?;
    let placed = solve_layout(&root, canvas, &mut engine)?;
    tracing::debug!("layout solved");

    let doc = paint(&placed, fonts, canvas)?;
    tracing::debug!(svg_len = doc.svg.len(), "painted");

    let png = rasterize(&doc, canvas.width, canvas.height)?;
    tracing::debug!(png_len = png.len(), "rasterized");

    Ok(RenderedImage {
        png,
        width: canvas.width,
        height: canvas.height,
    })
}

/// Render every route in parallel; one failure never affects the others.
///
/// Results come back in the order of `routes`.
#[tracing::instrument(skip_all, fields(routes = routes.len()))]
pub fn render_routes<'r>(
    routes: &'r [PreviewRoute],
    fonts: &FontAsset,
    branding: &Branding,
) -> Vec<(&'r PreviewRoute, OgResult<RenderedImage>)> {
    routes
        .par_iter()
        .map(|r| (r, render_preview(&r.request, fonts, branding)))
        .collect()
}
