use std::sync::Arc;

use crate::assets::svg_raster::RasterImage;
use crate::assets::theme::Theme;
use crate::foundation::core::{Affine, Canvas, Rect, Vec2};
use crate::foundation::error::{SeatMapError, SeatMapResult};
use crate::sprite::provider::RasterSpritePair;

/// A rendered surface as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Sprites uploaded as paint images for the CPU rasterizer.
#[derive(Clone)]
pub(crate) struct SpriteImages {
    pub(crate) theme: Theme,
    empty: vello_cpu::Image,
    filled: vello_cpu::Image,
    /// Edge length of the square source rasters.
    px: f64,
}

impl SpriteImages {
    pub(crate) fn from_raster(pair: &RasterSpritePair) -> SeatMapResult<Self> {
        if pair.empty.width != pair.filled.width || pair.empty.height != pair.filled.height {
            return Err(SeatMapError::render("sprite pair size mismatch"));
        }
        if pair.empty.width != pair.empty.height {
            return Err(SeatMapError::render("seat sprites must be square"));
        }
        Ok(Self {
            theme: pair.theme,
            empty: raster_to_image(&pair.empty)?,
            filled: raster_to_image(&pair.filled)?,
            px: f64::from(pair.empty.width),
        })
    }

    fn pick(&self, filled: bool) -> &vello_cpu::Image {
        if filled { &self.filled } else { &self.empty }
    }
}

/// Owned drawing surface: a device-pixel raster with the pixel-ratio scale baked in.
pub(crate) struct DrawSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    base: Affine,
    clear_rgba: Option<[u8; 4]>,
}

impl DrawSurface {
    pub(crate) fn new(
        canvas: Canvas,
        device_pixel_ratio: f64,
        clear_rgba: Option<[u8; 4]>,
    ) -> SeatMapResult<Self> {
        let (w, h) = canvas.physical_size(device_pixel_ratio)?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            base: Affine::scale(device_pixel_ratio),
            clear_rgba,
        })
    }

    pub(crate) fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    pub(crate) fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    /// Start a repaint. Everything drawn before the next [`DrawSurface::finish`] replaces the
    /// previous contents entirely.
    pub(crate) fn begin(&mut self) {
        self.ctx.reset();
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if let Some([r, g, b, a]) = self.clear_rgba {
            let w = f64::from(self.pixmap.width());
            let h = f64::from(self.pixmap.height());
            self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx
                .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        }
    }

    /// Draw one sprite into `dst`, given in logical pixels.
    pub(crate) fn draw_sprite(&mut self, sprites: &SpriteImages, filled: bool, dst: Rect) {
        let px = sprites.px;
        let tr = self.base
            * Affine::translate(Vec2::new(dst.x0, dst.y0))
            * Affine::scale_non_uniform(dst.width() / px, dst.height() / px);
        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(sprites.pick(filled).clone());
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, px, px));
    }

    /// Clear the raster and resolve the recorded draws into it.
    pub(crate) fn finish(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
    }

    pub(crate) fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn raster_to_image(img: &RasterImage) -> SeatMapResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> SeatMapResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SeatMapError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SeatMapError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(SeatMapError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
