#![forbid(unsafe_code)]
//! Seat map rendering for aircraft cabins.
//!
//! A [`CabinMap`] describes sections, rows, and seats with their class and offsets.
//! [`layout_cabin`] turns it into absolute seat rectangles, [`build_sprites`] rasterizes the
//! empty and filled seat glyphs for a [`Theme`], and [`SeatMapView`] repaints the seats onto an
//! owned surface whenever the cabin or its [`OccupancyState`] changes.

mod assets;
mod cabin;
mod foundation;
mod layout;
mod render;
mod sprite;

pub use assets::seat_glyph::{GLYPH_VIEWBOX, GlyphPaint, seat_glyph_svg};
pub use assets::svg_raster::{RasterImage, parse_svg, rasterize_svg_to_premul_rgba8};
pub use assets::theme::{Color, Theme, ThemePalette};
pub use cabin::class::{ClassMetrics, SeatClass};
pub use cabin::model::{CabinMap, Row, Seat, Section};
pub use cabin::occupancy::{OccupancyState, SeatFlags};
pub use foundation::core::{Affine, Canvas, Point, Rect, Size, Vec2};
pub use foundation::error::{SeatMapError, SeatMapResult};
pub use layout::engine::{CabinLayout, SeatPlacement, compute_origin, layout_cabin};
pub use render::scheduler::{FrameId, FrameScheduler, ManualScheduler};
pub use render::surface::FrameRGBA;
pub use render::view::{CycleOutcome, SeatDraw, SeatMapOpts, SeatMapView, ViewState, ViewStats};
pub use sprite::provider::{RasterSpritePair, SpriteLoader, build_sprites, sprite_raster_px};
