use taffy::prelude::{AvailableSpace, NodeId, Rect, Size};
use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto, Style,
};

use crate::assets::text::{TextBlock, TextLayoutEngine};
use crate::foundation::core::{Canvas, Edges, RectPx};
use crate::foundation::error::{OgError, OgResult};
use crate::layout::{Align, BoxStyle, Direction, Justify, LayoutNode, NodeKind, Spacing, TextSpec};

/// Added to a text box's solved width when re-wrapping for paint; a line measured at width `w`
/// must still fit at the solved `w`.
const WRAP_SLACK_PX: f32 = 0.5;

/// A node with its solved border box in absolute canvas coordinates.
#[derive(Debug, Clone)]
pub struct PlacedNode<'a> {
    /// Source node.
    pub node: &'a LayoutNode,
    /// Border box.
    pub rect: RectPx,
    /// Wrapped text for text leaves, positioned relative to the content box.
    pub text: Option<TextBlock>,
    /// Children in paint order.
    pub children: Vec<PlacedNode<'a>>,
}

impl PlacedNode<'_> {
    /// Content box (border box minus border and padding).
    pub fn content_rect(&self) -> RectPx {
        let s = &self.node.style;
        self.rect.inset(s.border_widths()).inset(s.padding)
    }
}

#[derive(Debug, Clone, Copy)]
struct LeafCtx {
    text: usize,
}

/// Solve `root` against a fixed canvas with flexbox rules; text wraps inside max widths and
/// may overflow vertically.
pub fn solve_layout<'a>(
    root: &'a LayoutNode,
    canvas: Canvas,
    engine: &mut TextLayoutEngine,
) -> OgResult<PlacedNode<'a>> {
    let mut taffy: taffy::TaffyTree<LeafCtx> = taffy::TaffyTree::new();
    let mut texts: Vec<(&'a TextSpec, Option<f32>)> = Vec::new();
    let root_id = build_subtree(&mut taffy, root, &mut texts)?;

    let available = Size {
        width: AvailableSpace::Definite(canvas.width_f32()),
        height: AvailableSpace::Definite(canvas.height_f32()),
    };

    let mut failure: Option<OgError> = None;
    taffy
        .compute_layout_with_measure(
            root_id,
            available,
            |known_dimensions, available_space, _node_id, node_context, _style| {
                if let Size {
                    width: Some(width),
                    height: Some(height),
                } = known_dimensions
                {
                    return Size { width, height };
                }
                let Some(ctx) = node_context else {
                    return Size::ZERO;
                };
                let (spec, max_width) = texts[ctx.text];

                let width_limit = known_dimensions.width.or(match available_space.width {
                    AvailableSpace::Definite(w) => Some(w),
                    AvailableSpace::MinContent => Some(0.0),
                    AvailableSpace::MaxContent => None,
                });
                let width_limit = match (width_limit, max_width) {
                    (Some(a), Some(m)) => Some(a.min(m)),
                    (a, m) => a.or(m),
                };

                match engine.layout(&spec.content, &spec.style, width_limit) {
                    Ok(block) => Size {
                        width: known_dimensions.width.unwrap_or(block.width),
                        height: known_dimensions.height.unwrap_or(block.height),
                    },
                    Err(e) => {
                        failure.get_or_insert(e);
                        Size::ZERO
                    }
                }
            },
        )
        .map_err(|e| OgError::layout(format!("compute layout: {e}")))?;

    if let Some(e) = failure {
        return Err(e);
    }

    place(&taffy, root, root_id, (0.0, 0.0), engine)
}

fn build_subtree<'a>(
    taffy: &mut taffy::TaffyTree<LeafCtx>,
    node: &'a LayoutNode,
    texts: &mut Vec<(&'a TextSpec, Option<f32>)>,
) -> OgResult<NodeId> {
    let style = taffy_style(&node.style)?;
    let id = match &node.kind {
        NodeKind::Container(children) => {
            let mut ids = Vec::with_capacity(children.len());
            for c in children {
                ids.push(build_subtree(taffy, c, texts)?);
            }
            taffy.new_with_children(style, &ids)
        }
        NodeKind::Text(spec) => {
            texts.push((spec, node.style.max_width));
            taffy.new_leaf_with_context(
                style,
                LeafCtx {
                    text: texts.len() - 1,
                },
            )
        }
    };
    id.map_err(|e| OgError::layout(format!("build layout tree: {e}")))
}

fn place<'a>(
    taffy: &taffy::TaffyTree<LeafCtx>,
    node: &'a LayoutNode,
    id: NodeId,
    origin: (f32, f32),
    engine: &mut TextLayoutEngine,
) -> OgResult<PlacedNode<'a>> {
    let l = taffy
        .layout(id)
        .map_err(|e| OgError::layout(format!("read layout: {e}")))?;
    let rect = RectPx {
        x: origin.0 + l.location.x,
        y: origin.1 + l.location.y,
        w: l.size.width,
        h: l.size.height,
    };

    let mut placed = PlacedNode {
        node,
        rect,
        text: None,
        children: Vec::new(),
    };

    match &node.kind {
        NodeKind::Text(spec) => {
            let content = placed.content_rect();
            let block =
                engine.layout(&spec.content, &spec.style, Some(content.w + WRAP_SLACK_PX))?;
            placed.text = Some(block);
        }
        NodeKind::Container(children) => {
            let ids = taffy
                .children(id)
                .map_err(|e| OgError::layout(format!("read layout children: {e}")))?;
            for (child, child_id) in children.iter().zip(ids) {
                placed
                    .children
                    .push(place(taffy, child, child_id, (rect.x, rect.y), engine)?);
            }
        }
    }

    Ok(placed)
}

fn taffy_style(s: &BoxStyle) -> OgResult<Style> {
    let border = s.border_widths();
    if !s.padding.is_valid_extent() {
        return Err(OgError::layout("padding must be finite and >= 0"));
    }
    if !border.is_valid_extent() {
        return Err(OgError::layout("border widths must be finite and >= 0"));
    }
    if !s.radius.is_finite() || s.radius < 0.0 {
        return Err(OgError::layout("corner radius must be finite and >= 0"));
    }
    for (what, v) in [
        ("width", s.width),
        ("height", s.height),
        ("max width", s.max_width),
    ] {
        if let Some(v) = v
            && (!v.is_finite() || v < 0.0)
        {
            return Err(OgError::layout(format!("{what} must be finite and >= 0")));
        }
    }

    let flex_direction = match s.direction {
        Direction::Row => FlexDirection::Row,
        Direction::Column => FlexDirection::Column,
    };
    let align_items = match s.align_items {
        Align::Stretch => AlignItems::Stretch,
        Align::Start => AlignItems::Start,
        Align::Center => AlignItems::Center,
        Align::End => AlignItems::End,
    };
    let justify_content = match s.justify {
        Justify::Start => JustifyContent::Start,
        Justify::Center => JustifyContent::Center,
        Justify::End => JustifyContent::End,
        Justify::SpaceBetween => JustifyContent::SpaceBetween,
    };

    Ok(Style {
        display: Display::Flex,
        flex_direction,
        align_items: Some(align_items),
        justify_content: Some(justify_content),
        padding: length_rect(s.padding),
        border: length_rect(border),
        margin: Rect {
            left: margin_side(s.margin.left)?,
            right: margin_side(s.margin.right)?,
            top: margin_side(s.margin.top)?,
            bottom: margin_side(s.margin.bottom)?,
        },
        size: Size {
            width: s.width.map(Dimension::length).unwrap_or(Dimension::auto()),
            height: s.height.map(Dimension::length).unwrap_or(Dimension::auto()),
        },
        max_size: Size {
            width: s
                .max_width
                .map(Dimension::length)
                .unwrap_or(Dimension::auto()),
            height: Dimension::auto(),
        },
        ..Style::default()
    })
}

fn length_rect(e: Edges<f32>) -> Rect<LengthPercentage> {
    Rect {
        left: LengthPercentage::length(e.left),
        right: LengthPercentage::length(e.right),
        top: LengthPercentage::length(e.top),
        bottom: LengthPercentage::length(e.bottom),
    }
}

fn margin_side(s: Spacing) -> OgResult<LengthPercentageAuto> {
    match s {
        Spacing::Auto => Ok(LengthPercentageAuto::auto()),
        Spacing::Px(v) if v.is_finite() => Ok(LengthPercentageAuto::length(v)),
        Spacing::Px(_) => Err(OgError::layout("margin must be finite")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
