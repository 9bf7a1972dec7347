//! Declarative box tree describing a preview card.
//!
//! [`build::build_layout`] produces the tree from a request, [`solver::solve_layout`] assigns
//! absolute rectangles and wraps text.

pub(crate) mod build;
pub(crate) mod solver;

use crate::assets::text::TextStyle;
use crate::foundation::core::{Edges, Rgba8};

/// Main axis of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

/// Cross-axis alignment of a container's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Fill the cross axis.
    #[default]
    Stretch,
    /// Pack to the cross-axis start.
    Start,
    /// Center on the cross axis.
    Center,
    /// Pack to the cross-axis end.
    End,
}

/// Main-axis distribution of a container's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    /// Pack to the start.
    #[default]
    Start,
    /// Center.
    Center,
    /// Pack to the end.
    End,
    /// First and last child at the edges, free space between.
    SpaceBetween,
}

/// A margin side: fixed length or `auto` (absorbs free space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    /// Fixed px.
    Px(f32),
    /// CSS `auto`.
    Auto,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Px(0.0)
    }
}

/// Box background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Single color.
    Solid(Rgba8),
    /// Left-to-right linear blend from `from` to `to`.
    HorizontalGradient {
        /// Color at the left edge.
        from: Rgba8,
        /// Color at the right edge.
        to: Rgba8,
    },
}

/// Border widths plus one color for all sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Per-side widths in px.
    pub widths: Edges<f32>,
    /// Stroke color.
    pub color: Rgba8,
}

/// Box-model attributes shared by every node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxStyle {
    /// Child stacking direction.
    pub direction: Direction,
    /// Cross-axis alignment of children.
    pub align_items: Align,
    /// Main-axis distribution of children.
    pub justify: Justify,
    /// Inner spacing.
    pub padding: Edges<f32>,
    /// Outer spacing.
    pub margin: Edges<Spacing>,
    /// Optional border, drawn inside the box.
    pub border: Option<Border>,
    /// Corner radius; clamped to half the short side when painting.
    pub radius: f32,
    /// Optional background.
    pub background: Option<Fill>,
    /// Fixed width.
    pub width: Option<f32>,
    /// Fixed height.
    pub height: Option<f32>,
    /// Upper bound on the border-box width; text wraps inside it.
    pub max_width: Option<f32>,
}

impl BoxStyle {
    /// Border widths, zero when no border is set.
    pub fn border_widths(&self) -> Edges<f32> {
        self.border.map(|b| b.widths).unwrap_or(Edges::ZERO)
    }
}

/// Text content plus how to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    /// Content with whitespace already collapsed.
    pub content: String,
    /// Shaping parameters.
    pub style: TextStyle,
    /// Fill color.
    pub color: Rgba8,
}

/// What a node holds.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Box with children.
    Container(Vec<LayoutNode>),
    /// Leaf sized by its text.
    Text(TextSpec),
}

/// One box in the card tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// Box-model attributes.
    pub style: BoxStyle,
    /// Children or text.
    pub kind: NodeKind,
}

impl LayoutNode {
    /// Container node.
    pub fn container(style: BoxStyle, children: Vec<LayoutNode>) -> Self {
        Self {
            style,
            kind: NodeKind::Container(children),
        }
    }

    /// Text leaf.
    pub fn text(style: BoxStyle, spec: TextSpec) -> Self {
        Self {
            style,
            kind: NodeKind::Text(spec),
        }
    }

    /// Children, empty for text leaves.
    pub fn children(&self) -> &[LayoutNode] {
        match &self.kind {
            NodeKind::Container(c) => c,
            NodeKind::Text(_) => &[],
        }
    }

    /// Depth-first visit of this node and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a LayoutNode)) {
        f(self);
        for c in self.children() {
            c.walk(f);
        }
    }
}
