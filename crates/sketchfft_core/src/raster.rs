//! Square grayscale raster the host sketches onto.
//!
//! The buffer owns its pixels outright; callers mutate it through
//! [`StrokeBuffer::draw_line`] and [`StrokeBuffer::clear`] and hand copies to
//! the spectrum stage via [`StrokeBuffer::snapshot`]. Coordinates are raster
//! pixels with the origin at the top-left corner.

use image::{GrayImage, Luma};
use log::trace;

/// Intensity of untouched pixels (white).
pub const BACKGROUND: u8 = 255;
/// Intensity stamped by strokes (black).
pub const INK: u8 = 0;

/// Owned square drawing surface.
///
/// Strokes stamp every pixel whose center lies within half the stroke width
/// of the requested segment. Segments reaching past the raster edge are
/// clipped silently; a segment entirely outside leaves the buffer untouched.
#[derive(Debug, Clone)]
pub struct StrokeBuffer {
    image: GrayImage,
}

impl StrokeBuffer {
    /// Blank buffer with `size` pixels per edge.
    pub fn new(size: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(size, size, Luma([BACKGROUND])),
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Intensity at (x, y). Panics outside the raster, like the underlying
    /// pixel access.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    /// Stamp a stroke segment from `p0` to `p1`.
    ///
    /// Width 0 is treated as a one-pixel hairline; a degenerate segment with
    /// `p0 == p1` and width 1 blackens exactly one pixel. Never fails.
    pub fn draw_line(&mut self, p0: (i32, i32), p1: (i32, i32), width: u32) {
        trace!(
            "stroke ({}, {}) -> ({}, {}) width {}",
            p0.0,
            p0.1,
            p1.0,
            p1.1,
            width
        );
        let radius = f64::from(width.max(1)) / 2.0;
        let size = i64::from(self.image.width());

        // Clamp the stamp region to the raster. The bounds are computed in
        // i64 so endpoints near the i32 limits and huge widths clip instead
        // of overflowing.
        let pad = radius.ceil() as i64 + 1;
        let min_x = (i64::from(p0.0.min(p1.0)) - pad).max(0);
        let max_x = (i64::from(p0.0.max(p1.0)) + pad).min(size - 1);
        let min_y = (i64::from(p0.1.min(p1.1)) - pad).max(0);
        let max_y = (i64::from(p0.1.max(p1.1)) + pad).min(size - 1);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let radius_sq = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if segment_distance_sq((x, y), p0, p1) <= radius_sq {
                    self.image.put_pixel(x as u32, y as u32, Luma([INK]));
                }
            }
        }
    }

    /// Reset every pixel to the background intensity.
    pub fn clear(&mut self) {
        trace!("clear {0}x{0} raster", self.size());
        for pixel in self.image.pixels_mut() {
            *pixel = Luma([BACKGROUND]);
        }
    }

    /// Owned copy of the current pixels. The transform stage works on
    /// snapshots, so later strokes never race a running computation.
    pub fn snapshot(&self) -> GrayImage {
        self.image.clone()
    }
}

/// Squared distance from pixel center `p` to the segment `a`..`b`.
fn segment_distance_sq(p: (i64, i64), a: (i32, i32), b: (i32, i32)) -> f64 {
    let (px, py) = (p.0 as f64, p.1 as f64);
    let (ax, ay) = (f64::from(a.0), f64::from(a.1));
    let (bx, by) = (f64::from(b.0), f64::from(b.1));
    let (dx, dy) = (bx - ax, by - ay);

    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        // Degenerate segment: distance to the single point.
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (ax + t * dx, ay + t * dy);
    let (ex, ey) = (px - cx, py - cy);
    ex * ex + ey * ey
}
