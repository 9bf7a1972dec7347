use std::borrow::Cow;

use crate::assets::fonts::{FontAsset, FontWeight};
use crate::foundation::error::{OgError, OgResult};

/// Shaping parameters for one text box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in px.
    pub size_px: f32,
    /// Face to shape with.
    pub weight: FontWeight,
    /// Line box height as a multiple of `size_px`.
    pub line_height: f32,
    /// Extra spacing between glyphs, in em.
    pub letter_spacing_em: f32,
}

impl TextStyle {
    fn validate(&self) -> OgResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(OgError::layout("text size_px must be finite and > 0"));
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(OgError::layout("text line_height must be finite and > 0"));
        }
        if !self.letter_spacing_em.is_finite() {
            return Err(OgError::layout("text letter_spacing must be finite"));
        }
        Ok(())
    }

    /// Letter spacing in px.
    pub fn letter_spacing_px(&self) -> f32 {
        self.letter_spacing_em * self.size_px
    }

    /// Line box height in px.
    pub fn line_height_px(&self) -> f32 {
        self.line_height * self.size_px
    }
}

/// One wrapped line, positioned relative to the top-left of its text box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Line content with trailing whitespace removed.
    pub text: String,
    /// Horizontal offset from the box's left edge.
    pub x: f32,
    /// Baseline from the box's top edge.
    pub baseline: f32,
    /// Advance width of the line.
    pub advance: f32,
}

/// Result of shaping and wrapping a string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBlock {
    /// Wrapped lines, top to bottom.
    pub lines: Vec<TextLine>,
    /// Widest line advance.
    pub width: f32,
    /// Sum of line box heights.
    pub height: f32,
}

/// Parley-backed shaper bound to one [`FontAsset`].
///
/// The collection only knows the asset's two faces, so measurement never depends on what
/// happens to be installed on the host.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family: String,
}

impl TextLayoutEngine {
    /// Register both weights of `fonts` into fresh Parley contexts.
    pub fn new(fonts: &FontAsset) -> OgResult<Self> {
        let mut font_ctx = parley::FontContext {
            collection: parley::fontique::Collection::new(parley::fontique::CollectionOptions {
                shared: false,
                system_fonts: false,
            }),
            source_cache: parley::fontique::SourceCache::default(),
        };

        let mut family = None;
        for weight in [FontWeight::Regular, FontWeight::Bold] {
            let families = font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(fonts.bytes(weight).to_vec()),
                None,
            );
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                OgError::config(format!(
                    "no font families registered from {weight:?} font bytes"
                ))
            })?;
            if family.is_none() {
                family = font_ctx
                    .collection
                    .family_name(family_id)
                    .map(str::to_owned);
            }
        }

        let family =
            family.ok_or_else(|| OgError::config("registered font family has no name"))?;

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    /// Family name Parley resolved from the regular face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Shape `text` and wrap it at `max_width_px` (unbounded when `None`).
    ///
    /// Lines are stacked CSS-style: each line box is `line_height * size_px` tall with the
    /// glyph ascent/descent centered inside it.
    pub fn layout(
        &mut self,
        text: &str,
        style: &TextStyle,
        max_width_px: Option<f32>,
    ) -> OgResult<TextBlock> {
        style.validate()?;
        if let Some(w) = max_width_px
            && (!w.is_finite() || w < 0.0)
        {
            return Err(OgError::layout("text max width must be finite and >= 0"));
        }
        if text.is_empty() {
            return Ok(TextBlock::default());
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(style.weight.css_weight())),
        ));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing_px(),
        ));
        builder.push_default(parley::style::StyleProperty::OverflowWrap(
            parley::style::OverflowWrap::BreakWord,
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );

        let line_h = style.line_height_px();
        let mut lines = Vec::new();
        let mut width = 0.0f32;
        for (i, line) in layout.lines().enumerate() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                if run.glyphs().any(|g| g.id == 0) {
                    return Err(OgError::render(format!(
                        "text contains characters not covered by font family '{}'",
                        self.family
                    )));
                }
            }

            let m = line.metrics();
            let half_leading = (line_h - (m.ascent + m.descent)) / 2.0;
            let baseline = (i as f32) * line_h + half_leading + m.ascent;

            let content = text
                .get(line.text_range())
                .unwrap_or_default()
                .trim_end()
                .to_owned();
            width = width.max(m.advance);
            lines.push(TextLine {
                text: content,
                x: m.offset,
                baseline,
                advance: m.advance,
            });
        }

        let height = (lines.len() as f32) * line_h;
        Ok(TextBlock {
            lines,
            width,
            height,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
