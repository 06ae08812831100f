//! Integer rasterization of 2-D primitives
//!
//! Every primitive writes through [`Framebuffer::set_pixel`], so shapes that
//! leave the screen are clipped pixel by pixel and nothing is validated up
//! front. Internal arithmetic is widened past `i32`, and loops only visit
//! rows or columns that can land on screen, so any `i32` input is accepted.
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::{Color, Dimensions, Framebuffer, Rotation};
//!
//! let dims = Dimensions::new(8, 8).unwrap();
//! let mut fb = Framebuffer::from_buffer([0u8; 8], dims, Rotation::Rotate0).unwrap();
//!
//! fb.draw_line(0, 5, 4, 5, Color::White);
//! assert_eq!(fb.as_bytes()[5], 0b0001_1111);
//! ```

use core::mem::swap;

use crate::color::Color;
use crate::framebuffer::Framebuffer;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a line between two points, both inclusive
    ///
    /// Vertical and horizontal lines are plain runs; everything else uses
    /// Bresenham's algorithm.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.line(
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
            color,
        );
    }

    /// Draw the outline of the box from `(x, y)` to `(x + w, y + h)`
    ///
    /// `w` and `h` are clamped to the width and height of the screen.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        let (x, y) = (i64::from(x), i64::from(y));
        let (right, bottom) = self.clamped_corner(x, y, w, h);

        self.line(x, y, right, y, color);
        self.line(x, bottom, right, bottom, color);
        self.line(x, y, x, bottom, color);
        self.line(right, y, right, bottom, color);
    }

    /// Fill a rectangle
    ///
    /// Draws the span `[x, x + w]` on every row in `[y, y + h)`, after
    /// clamping `w` and `h` to the screen.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        let (x, y) = (i64::from(x), i64::from(y));
        let (right, bottom) = self.clamped_corner(x, y, w, h);
        let bottom = bottom.min(i64::from(self.height()));

        for row in y.max(0)..bottom {
            self.line(x, row, right, row, color);
        }
    }

    /// Draw a circle outline with the midpoint algorithm
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let r = i64::from(radius);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.plot(cx, cy + r, color);
        self.plot(cx, cy - r, color);
        self.plot(cx + r, cy, color);
        self.plot(cx - r, cy, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(cx + x, cy + y, color);
            self.plot(cx - x, cy + y, color);
            self.plot(cx + x, cy - y, color);
            self.plot(cx - x, cy - y, color);
            self.plot(cx + y, cy + x, color);
            self.plot(cx - y, cy + x, color);
            self.plot(cx + y, cy - x, color);
            self.plot(cx - y, cy - x, color);
        }
    }

    /// Draw a filled circle
    ///
    /// Same recurrence as [`draw_circle`](Self::draw_circle), with each
    /// step drawn as vertical spans between the symmetric points.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let r = i64::from(radius);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.line(cx, cy - r, cx, cy + r, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.line(cx + x, cy - y, cx + x, cy + y, color);
            self.line(cx - x, cy - y, cx - x, cy + y, color);
            self.line(cx + y, cy - x, cx + y, cy + x, color);
            self.line(cx - y, cy - x, cx - y, cy + x, color);
        }
    }

    /// Draw a triangle outline
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Draw a filled triangle with horizontal scanlines
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let (mut x2, mut y2) = (i64::from(x2), i64::from(y2));

        // sort by y: y0 <= y1 <= y2
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y1, &mut y2);
            swap(&mut x1, &mut x2);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            let left = x0.min(x1).min(x2);
            let right = x0.max(x1).max(x2);
            self.line(left, y0, right, y0, color);
            return;
        }

        let dx01 = x1 - x0;
        let dy01 = y1 - y0;
        let dx02 = x2 - x0;
        let dy02 = y2 - y0;
        let dx12 = x2 - x1;
        let dy12 = y2 - y1;
        let bottom_row = i64::from(self.height()) - 1;

        // The upper phase includes row y1 only when the bottom edge is flat,
        // otherwise the lower phase starts on it. A flat top skips it entirely.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        for y in y0.max(0)..=last.min(bottom_row) {
            let a = interpolate(x0, dx01, y - y0, dy01);
            let b = interpolate(x0, dx02, y - y0, dy02);
            self.line(a, y, b, y, color);
        }

        for y in (last + 1).max(0)..=y2.min(bottom_row) {
            let a = interpolate(x1, dx12, y - y1, dy12);
            let b = interpolate(x0, dx02, y - y0, dy02);
            self.line(a, y, b, y, color);
        }
    }

    /// Line between two widened points
    ///
    /// The loop runs over the on-screen part of the major axis only. When
    /// the start is off screen the Bresenham state is advanced in closed
    /// form, which yields the same pixels as stepping through every column.
    fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let width = i64::from(self.width());
        let height = i64::from(self.height());

        if x0 == x1 {
            let (top, bottom) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
            for y in top.max(0)..=bottom.min(height - 1) {
                self.plot(x0, y, color);
            }
            return;
        }

        if y0 == y1 {
            let (left, right) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
            for x in left.max(0)..=right.min(width - 1) {
                self.plot(x, y0, color);
            }
            return;
        }

        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };
        let limit = if steep { height } else { width };

        let start = x0.max(0);
        let end = x1.min(limit - 1);
        if start > end {
            return;
        }

        // err stays in [0, dx) after every step, so after k steps it is
        // (dx / 2 - k * dy) mod dx and y has moved once per wrap
        let k = i128::from(start - x0);
        let t = i128::from(dx / 2) - k * i128::from(dy);
        let wraps = -t.div_euclid(i128::from(dx));
        // both are bounded by dx and k, which fit in i64
        let mut err = t.rem_euclid(i128::from(dx)) as i64;
        let mut y = y0 + y_step * wraps as i64;

        for x in start..=end {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += y_step;
                err += dx;
            }
        }
    }

    /// Set a pixel from widened coordinates, dropping anything off the `i32` plane
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Far corner of a rectangle after clamping its size to the screen
    fn clamped_corner(&self, x: i64, y: i64, w: u16, h: u16) -> (i64, i64) {
        let w = i64::from(w.min(self.width()));
        let h = i64::from(h.min(self.height()));
        (x + w, y + h)
    }
}

/// `x + dx * steps / dy` with truncating division, for `0 <= steps <= dy`
fn interpolate(x: i64, dx: i64, steps: i64, dy: i64) -> i64 {
    // the quotient lies between 0 and dx
    x + (i128::from(dx) * i128::from(steps) / i128::from(dy)) as i64
}
