use std::sync::mpsc;

use crate::assets::seat_glyph::{GlyphPaint, seat_glyph_svg};
use crate::assets::svg_raster::{RasterImage, parse_svg, rasterize_svg_to_premul_rgba8};
use crate::assets::theme::Theme;
use crate::cabin::class::max_sprite_extent;
use crate::foundation::error::{SeatMapError, SeatMapResult};

/// Empty and filled seat sprites for one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterSpritePair {
    /// Theme the sprites were built for.
    pub theme: Theme,
    /// Outline in the theme's base color, no fill.
    pub empty: RasterImage,
    /// Fill in the theme's primary color, no outline.
    pub filled: RasterImage,
}

/// Square raster edge, in device pixels, large enough for the biggest class sprite.
pub fn sprite_raster_px(device_pixel_ratio: f64) -> u32 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    (max_sprite_extent() * dpr).ceil().max(1.0) as u32
}

/// Rasterize both seat sprites for `theme` at `raster_px x raster_px`.
#[tracing::instrument]
pub fn build_sprites(theme: Theme, raster_px: u32) -> SeatMapResult<RasterSpritePair> {
    let palette = theme.palette();
    let render = |paint: GlyphPaint| -> SeatMapResult<RasterImage> {
        let tree = parse_svg(&seat_glyph_svg(paint))?;
        rasterize_svg_to_premul_rgba8(&tree, raster_px, raster_px)
    };

    Ok(RasterSpritePair {
        theme,
        empty: render(GlyphPaint::outline(palette.base))?,
        filled: render(GlyphPaint::solid(palette.primary))?,
    })
}

/// Builds a [`RasterSpritePair`] on a worker thread.
///
/// The result is delivered exactly once through [`SpriteLoader::poll`] or
/// [`SpriteLoader::wait`]; the loader is spent afterwards.
#[derive(Debug)]
pub struct SpriteLoader {
    theme: Theme,
    rx: Option<mpsc::Receiver<SeatMapResult<RasterSpritePair>>>,
}

impl SpriteLoader {
    /// Start building sprites for `theme`.
    pub fn spawn(theme: Theme, raster_px: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let spawned = std::thread::Builder::new()
            .name("seatmap-sprites".to_owned())
            .spawn(move || {
                // The receiver may already be gone after a theme change.
                let _ = worker_tx.send(build_sprites(theme, raster_px));
            });
        if let Err(e) = spawned {
            let _ = tx.send(Err(SeatMapError::render(format!(
                "spawn sprite worker: {e}"
            ))));
        }
        tracing::debug!(?theme, raster_px, "sprite build started");
        Self {
            theme,
            rx: Some(rx),
        }
    }

    pub(crate) fn from_receiver(
        theme: Theme,
        rx: mpsc::Receiver<SeatMapResult<RasterSpritePair>>,
    ) -> Self {
        Self {
            theme,
            rx: Some(rx),
        }
    }

    /// Theme being built.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Non-blocking check. `None` while the build is still running or once the result was taken.
    pub fn poll(&mut self) -> Option<SeatMapResult<RasterSpritePair>> {
        let rx = self.rx.as_ref()?;
        let out = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => Err(SeatMapError::render(
                "sprite worker exited without a result",
            )),
        };
        self.rx = None;
        Some(out)
    }

    /// Block until the build finishes.
    pub fn wait(&mut self) -> SeatMapResult<RasterSpritePair> {
        let rx = self
            .rx
            .take()
            .ok_or_else(|| SeatMapError::render("sprite result already taken"))?;
        rx.recv()
            .map_err(|_| SeatMapError::render("sprite worker exited without a result"))?
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/provider.rs"]
mod tests;
