//! Theme palettes and the seat glyph's vector description and rasterization.

pub(crate) mod seat_glyph;
pub(crate) mod svg_raster;
pub(crate) mod theme;
