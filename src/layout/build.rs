use crate::assets::fonts::FontWeight;
use crate::assets::text::TextStyle;
use crate::foundation::core::{Canvas, Edges, Rgba8};
use crate::layout::{
    Align, Border, BoxStyle, Direction, Fill, Justify, LayoutNode, Spacing, TextSpec,
};
use crate::model::{Branding, PagePreviewRequest};
use crate::palette::Palette;

/// Alpha of the badge gradient stops and border (`40` hex suffix, 64/255).
pub const ACCENT_ALPHA: u8 = 0x40;
/// Title wraps inside this width.
pub const TITLE_MAX_WIDTH: f32 = 1000.0;
/// Description wraps inside this width.
pub const DESCRIPTION_MAX_WIDTH: f32 = 900.0;

const CARD_RADIUS: f32 = 32.0;
const PILL_RADIUS: f32 = 999.0;

/// Build the card tree: category badge, title, description, footer.
pub fn build_layout(
    request: &PagePreviewRequest,
    palette: &Palette,
    branding: &Branding,
) -> LayoutNode {
    let badge = LayoutNode::container(
        BoxStyle {
            padding: Edges::symmetric(10.0, 28.0),
            radius: PILL_RADIUS,
            border: Some(Border {
                widths: Edges::all(2.0),
                color: palette.blue.with_alpha(ACCENT_ALPHA),
            }),
            background: Some(Fill::HorizontalGradient {
                from: palette.blue.with_alpha(ACCENT_ALPHA),
                to: palette.mauve.with_alpha(ACCENT_ALPHA),
            }),
            ..BoxStyle::default()
        },
        vec![text_leaf(
            BoxStyle::default(),
            &collapse_whitespace(&request.category).to_uppercase(),
            text_style(22.0, FontWeight::Bold, 1.2, 0.08),
            palette.blue,
        )],
    );

    let header = LayoutNode::container(
        BoxStyle {
            direction: Direction::Row,
            align_items: Align::Center,
            margin: margin_bottom(Spacing::Px(36.0)),
            ..BoxStyle::default()
        },
        vec![badge],
    );

    let title = text_leaf(
        BoxStyle {
            margin: margin_bottom(Spacing::Px(28.0)),
            max_width: Some(TITLE_MAX_WIDTH),
            ..BoxStyle::default()
        },
        &collapse_whitespace(&request.title),
        text_style(68.0, FontWeight::Bold, 1.1, -0.03),
        palette.text,
    );

    let description = text_leaf(
        BoxStyle {
            margin: margin_bottom(Spacing::Auto),
            max_width: Some(DESCRIPTION_MAX_WIDTH),
            ..BoxStyle::default()
        },
        &collapse_whitespace(&request.description),
        text_style(30.0, FontWeight::Regular, 1.5, 0.0),
        palette.subtext,
    );

    let footer = LayoutNode::container(
        BoxStyle {
            direction: Direction::Row,
            align_items: Align::Center,
            justify: Justify::SpaceBetween,
            padding: Edges::top_only(36.0),
            border: Some(Border {
                widths: Edges::top_only(2.5),
                color: palette.surface,
            }),
            margin: Edges {
                top: Spacing::Px(40.0),
                ..Edges::default()
            },
            ..BoxStyle::default()
        },
        vec![
            text_leaf(
                BoxStyle::default(),
                &collapse_whitespace(&branding.name),
                text_style(30.0, FontWeight::Bold, 1.2, 0.04),
                palette.text,
            ),
            text_leaf(
                BoxStyle::default(),
                &collapse_whitespace(&branding.domain),
                text_style(26.0, FontWeight::Regular, 1.2, 0.04),
                palette.subtext,
            ),
        ],
    );

    LayoutNode::container(
        BoxStyle {
            direction: Direction::Column,
            padding: Edges::symmetric(64.0, 96.0),
            radius: CARD_RADIUS,
            background: Some(Fill::Solid(palette.base)),
            width: Some(Canvas::OG.width_f32()),
            height: Some(Canvas::OG.height_f32()),
            ..BoxStyle::default()
        },
        vec![header, title, description, footer],
    )
}

/// CSS `white-space: normal`: runs of ASCII whitespace become one space, ends trimmed.
///
/// Other Unicode spaces such as U+00A0 are content and stay as they are.
pub fn collapse_whitespace(s: &str) -> String {
    s.split(|c: char| c.is_ascii_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_leaf(style: BoxStyle, content: &str, text: TextStyle, color: Rgba8) -> LayoutNode {
    LayoutNode::text(
        style,
        TextSpec {
            content: content.to_owned(),
            style: text,
            color,
        },
    )
}

fn text_style(size_px: f32, weight: FontWeight, line_height: f32, spacing_em: f32) -> TextStyle {
    TextStyle {
        size_px,
        weight,
        line_height,
        letter_spacing_em: spacing_em,
    }
}

fn margin_bottom(v: Spacing) -> Edges<Spacing> {
    Edges {
        bottom: v,
        ..Edges::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/build.rs"]
mod tests;
