//! World-to-surface projection
//!
//! A [`ViewPort`] is rebuilt every frame from the surface size, the view size,
//! the pan offset and the live position of the centered body, so there is
//! no cached transform to go stale.

use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewPort {
    dx: f64, // world units per pixel along x
    dy: f64, // world units per pixel along y
    pixel_center: NVec2,
    pan: NVec2,
    center: Option<NVec2>,
}

impl ViewPort {
    /// `zoom_size` is the world half-extent of the shorter surface axis; the
    /// longer axis is widened by the aspect ratio so pixels stay square.
    pub fn new(width: f64, height: f64, zoom_size: f64, pan: NVec2) -> Self {
        let (half_x, half_y) = if width < height {
            (zoom_size, zoom_size * height / width)
        } else {
            (zoom_size * width / height, zoom_size)
        };

        Self {
            dx: 2.0 * half_x / width,
            dy: 2.0 * half_y / height,
            pixel_center: NVec2::new(width / 2.0, height / 2.0),
            pan,
            center: None,
        }
    }

    /// Keep the world point `position` (usually a body's current position)
    /// at the optical center of the view
    pub fn centered_on(mut self, position: Option<NVec2>) -> Self {
        self.center = position;
        self
    }

    /// World units per pixel, `(x, y)`
    pub fn scale(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Pixel coordinates of the surface center, without pan
    pub fn pixel_center(&self) -> NVec2 {
        self.pixel_center
    }

    /// World length to pixels, using the x-axis ratio
    pub fn translate_scalar(&self, length: f64) -> f64 {
        length / self.dx
    }

    /// World point to pixel point
    pub fn translate(&self, position: NVec2) -> NVec2 {
        let p = match self.center {
            Some(c) => position - c,
            None => position,
        };

        NVec2::new(
            p.x / self.dx + self.pixel_center.x + self.pan.x,
            p.y / self.dy + self.pixel_center.y + self.pan.y,
        )
    }
}
