use crate::foundation::error::{SeatMapError, SeatMapResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Logical drawing canvas dimensions, before device pixel scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Canvas {
    /// Physical surface size for a device pixel ratio, rounded up to whole pixels.
    ///
    /// The backing raster stores dimensions as `u16`, so larger surfaces are rejected.
    pub fn physical_size(self, device_pixel_ratio: f64) -> SeatMapResult<(u16, u16)> {
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(SeatMapError::validation(format!(
                "device pixel ratio must be finite and > 0, got {device_pixel_ratio}"
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SeatMapError::validation("canvas must be non-empty"));
        }

        fn scale(v: u32, dpr: f64) -> SeatMapResult<u16> {
            let px = (f64::from(v) * dpr).ceil().max(1.0);
            if px > f64::from(u16::MAX) {
                return Err(SeatMapError::validation(format!(
                    "scaled surface dimension {px} exceeds {}",
                    u16::MAX
                )));
            }
            Ok(px as u16)
        }

        Ok((
            scale(self.width, device_pixel_ratio)?,
            scale(self.height, device_pixel_ratio)?,
        ))
    }

    /// Logical bounds `[0, width] x [0, height]`.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
