//! ogcard renders social preview ("Open Graph") images for a personal site.
//!
//! Every card is a fixed 1200x630 PNG built in four steps:
//!
//! - Build a declarative [`LayoutNode`] tree from a [`PagePreviewRequest`] and a [`Palette`]
//! - Solve it with flexbox rules into absolute rectangles, wrapping text with the site fonts
//! - Paint the result as an SVG [`VectorDocument`]
//! - Rasterize that document to PNG
//!
//! [`render_preview`] runs the whole pipeline; [`SiteConfig`] and [`enumerate_routes`] decide which
//! cards a site needs.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod palette;
pub(crate) mod render;
pub(crate) mod routes;
/// Preview HTTP server.
pub mod serve;

pub use crate::foundation::core::{Canvas, Edges, RectPx, Rgba8};
pub use crate::foundation::error::{OgError, OgResult};

pub use crate::assets::fonts::{FontAsset, FontWeight, font_paths};
pub use crate::assets::text::{TextBlock, TextLayoutEngine, TextLine, TextStyle};
pub use crate::config::{FontConfig, SiteConfig, SiteMeta};
pub use crate::layout::build::{
    ACCENT_ALPHA, DESCRIPTION_MAX_WIDTH, TITLE_MAX_WIDTH, build_layout, collapse_whitespace,
};
pub use crate::layout::solver::{PlacedNode, solve_layout};
pub use crate::layout::{
    Align, Border, BoxStyle, Direction, Fill, Justify, LayoutNode, NodeKind, Spacing, TextSpec,
};
pub use crate::model::{Branding, PagePreviewRequest};
pub use crate::palette::{DARK, LIGHT, Palette, Theme};
pub use crate::render::paint::{VectorDocument, paint};
pub use crate::render::pipeline::{
    CACHE_CONTROL, CONTENT_TYPE, RenderedImage, render_preview, render_routes,
};
pub use crate::render::raster::rasterize;
pub use crate::routes::{
    ContentItem, DEFAULT_CATEGORY, HOME_ROUTE, HomeEntry, OG_PREFIX, PreviewRoute, RouteTable,
    enumerate_routes, og_path, route_from_og_path,
};
pub use crate::serve::{PreviewResponse, PreviewService};
