use std::fmt::Write as _;
use std::sync::Arc;

use quick_xml::escape::escape;

use crate::assets::fonts::FontAsset;
use crate::assets::text::TextBlock;
use crate::foundation::core::{Canvas, Edges, RectPx, Rgba8, Shape as _};
use crate::foundation::error::{OgError, OgResult};
use crate::layout::solver::PlacedNode;
use crate::layout::{Border, Fill, NodeKind, TextSpec};

/// Curve flattening tolerance for rounded corners, in px.
const PATH_TOLERANCE: f64 = 0.1;

/// Painted card: SVG markup plus the font database its `<text>` elements resolve against.
#[derive(Clone)]
pub struct VectorDocument {
    /// Complete SVG document.
    pub svg: String,
    /// Exactly the two faces of the asset the document was painted with.
    pub fontdb: Arc<usvg::fontdb::Database>,
    /// Document size.
    pub canvas: Canvas,
}

impl std::fmt::Debug for VectorDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorDocument")
            .field("svg_len", &self.svg.len())
            .field("faces", &self.fontdb.len())
            .field("canvas", &self.canvas)
            .finish()
    }
}

/// Paint a solved tree into an SVG document, in tree order (background, border, text,
/// children).
pub fn paint(root: &PlacedNode<'_>, fonts: &FontAsset, canvas: Canvas) -> OgResult<VectorDocument> {
    let mut painter = SvgPainter {
        family: fonts.family(),
        defs: String::new(),
        body: String::new(),
        gradients: 0,
    };
    painter.node(root)?;

    let mut svg = String::with_capacity(painter.defs.len() + painter.body.len() + 256);
    write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    )
    .map_err(fmt_err)?;
    if !painter.defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&painter.defs);
        svg.push_str("</defs>");
    }
    svg.push_str(&painter.body);
    svg.push_str("</svg>");

    Ok(VectorDocument {
        svg,
        fontdb: fonts.fontdb(),
        canvas,
    })
}

struct SvgPainter<'f> {
    family: &'f str,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgPainter<'_> {
    fn node(&mut self, placed: &PlacedNode<'_>) -> OgResult<()> {
        let style = &placed.node.style;

        if let Some(fill) = style.background {
            let paint = self.fill_paint(fill)?;
            let d = placed.rect.rounded(style.radius).to_path(PATH_TOLERANCE).to_svg();
            write!(self.body, r#"<path d="{d}" {paint}/>"#).map_err(fmt_err)?;
        }

        if let Some(border) = style.border {
            self.border(placed.rect, style.radius, border)?;
        }

        if let (NodeKind::Text(spec), Some(block)) = (&placed.node.kind, &placed.text) {
            self.text(placed.content_rect(), spec, block)?;
        }

        for child in &placed.children {
            self.node(child)?;
        }
        Ok(())
    }

    fn fill_paint(&mut self, fill: Fill) -> OgResult<String> {
        match fill {
            Fill::Solid(c) => Ok(color_attrs("fill", c)),
            Fill::HorizontalGradient { from, to } => {
                let id = format!("g{}", self.gradients);
                self.gradients += 1;
                write!(
                    self.defs,
                    r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="0">{}{}</linearGradient>"#,
                    stop(0.0, from),
                    stop(1.0, to),
                )
                .map_err(fmt_err)?;
                Ok(format!(r#"fill="url(#{id})""#))
            }
        }
    }

    fn border(&mut self, rect: RectPx, radius: f32, border: Border) -> OgResult<()> {
        let w = border.widths;
        if w.is_uniform() {
            if w.top <= 0.0 {
                return Ok(());
            }
            let half = w.top / 2.0;
            let d = rect
                .inset(Edges::all(half))
                .rounded((radius - half).max(0.0))
                .to_path(PATH_TOLERANCE)
                .to_svg();
            write!(
                self.body,
                r#"<path d="{d}" fill="none" {} stroke-width="{}"/>"#,
                color_attrs("stroke", border.color),
                num(w.top)
            )
            .map_err(fmt_err)?;
            return Ok(());
        }

        let sides = [
            (w.top, RectPx { h: w.top, ..rect }),
            (
                w.bottom,
                RectPx {
                    y: rect.y + rect.h - w.bottom,
                    h: w.bottom,
                    ..rect
                },
            ),
            (w.left, RectPx { w: w.left, ..rect }),
            (
                w.right,
                RectPx {
                    x: rect.x + rect.w - w.right,
                    w: w.right,
                    ..rect
                },
            ),
        ];
        for (width, band) in sides {
            if width <= 0.0 {
                continue;
            }
            write!(
                self.body,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                num(band.x),
                num(band.y),
                num(band.w),
                num(band.h),
                color_attrs("fill", border.color)
            )
            .map_err(fmt_err)?;
        }
        Ok(())
    }

    fn text(&mut self, content: RectPx, spec: &TextSpec, block: &TextBlock) -> OgResult<()> {
        let quoted = format!("'{}'", self.family);
        let family = escape(quoted.as_str()).into_owned();
        for line in &block.lines {
            if line.text.is_empty() {
                continue;
            }
            write!(
                self.body,
                r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" font-weight="{}" letter-spacing="{}" {}>{}</text>"#,
                num(content.x + line.x),
                num(content.y + line.baseline),
                num(spec.style.size_px),
                spec.style.weight.css_weight(),
                num(spec.style.letter_spacing_px()),
                color_attrs("fill", spec.color),
                escape(line.text.as_str()),
            )
            .map_err(fmt_err)?;
        }
        Ok(())
    }
}

fn stop(offset: f32, c: Rgba8) -> String {
    format!(
        r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
        num(offset),
        c.to_hex_rgb(),
        num(c.opacity())
    )
}

/// `fill="#rrggbb"` plus `fill-opacity` when translucent (same for `stroke`).
fn color_attrs(attr: &str, c: Rgba8) -> String {
    if c.is_opaque() {
        format!(r#"{attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{}""#,
            c.to_hex_rgb(),
            num(c.opacity())
        )
    }
}

/// Fixed 3-decimal formatting with trailing zeros trimmed.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn fmt_err(e: std::fmt::Error) -> OgError {
    OgError::render(format!("write svg: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
