//! SVG painting, rasterization and the end-to-end preview pipeline.

pub(crate) mod paint;
pub(crate) mod pipeline;
pub(crate) mod raster;
