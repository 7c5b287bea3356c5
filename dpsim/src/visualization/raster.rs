//! Line and filled-circle rasterization into a [`PixelBuffer`]
//!
//! Both rasterizers only walk the part of the primitive that can land on the
//! buffer, so the cost of a frame is bounded by the surface size whatever the
//! pendulum's lengths and masses are.

use super::pixels::PixelBuffer;

/// One horizontal run of pixels, `x0..=x1` on row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i64,
    pub x0: i64,
    pub x1: i64,
}

/// `floor(sqrt(2 r dy - dy^2))`, half width of the scanline `dy` rows in from the rim
fn half_width(radius: i64, dy: i64) -> i64 {
    let r = radius as f64;
    let d = dy as f64;
    (2.0 * r * d - d * d).sqrt().floor() as i64
}

fn narrow(v: i128) -> i64 {
    v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// The pair of scanlines `dy` rows in from the rim: `cy + dy - r` and its mirror `cy - dy + r`
fn span_pair(cx: i64, cy: i64, radius: i64, dy: i64) -> [Span; 2] {
    let dx = i128::from(half_width(radius, dy));
    let (cx, cy, r, d) = (i128::from(cx), i128::from(cy), i128::from(radius), i128::from(dy));
    let (x0, x1) = (narrow(cx - dx), narrow(cx + dx));
    [
        Span { y: narrow(cy + d - r), x0, x1 },
        Span { y: narrow(cy - d + r), x0, x1 },
    ]
}

/// Scanlines of a filled disc centred on `(cx, cy)`, unclipped
///
/// For each `dy` in `1..=radius` the half width is
/// `dx = floor(sqrt(2 r dy - dy^2))` and two spans are yielded, one at
/// `cy + dy - r` and its mirror at `cy - dy + r`. Both land on `cy` when
/// `dy == r`. A radius of zero or less yields no spans.
pub fn circle_spans(cx: i64, cy: i64, radius: i64) -> impl Iterator<Item = Span> {
    (1..=radius).flat_map(move |dy| span_pair(cx, cy, radius, dy))
}

/// Fill a disc, clipped to the buffer
///
/// Only the `dy` whose scanline falls on a buffer row are visited, at most
/// `height` per half.
pub fn fill_circle(cx: i64, cy: i64, radius: i64, pixel_data: &mut PixelBuffer, color: u32) {
    let (c, r, h) = (
        i128::from(cy),
        i128::from(radius),
        i128::from(pixel_data.height()),
    );

    // upper half: 0 <= cy + dy - r < h
    let upper = (r - c).max(1)..=(r - c + h - 1).min(r);
    // lower half: 0 <= cy - dy + r < h
    let lower = (c + r - h + 1).max(1)..=(c + r).min(r);

    for (range, half) in [(upper, 0usize), (lower, 1usize)] {
        for dy in range {
            let span = span_pair(cx, cy, radius, dy as i64)[half];
            pixel_data.hline(span.x0, span.x1, span.y, color);
        }
    }
}

/// Clip a segment to `[0, width) x [0, height)` with Liang-Barsky
///
/// Endpoints already inside are returned unchanged, clipped ones are rounded
/// onto the nearest pixel of the edge they were cut at.
fn clip_segment(
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    width: u32,
    height: u32,
) -> Option<(i64, i64, i64, i64)> {
    if width == 0 || height == 0 {
        return None;
    }
    let (fx, fy) = (x0 as f64, y0 as f64);
    let (dx, dy) = (x1 as f64 - fx, y1 as f64 - fy);
    let (xmax, ymax) = (f64::from(width - 1), f64::from(height - 1));

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, fx), (dx, xmax - fx), (-dy, fy), (dy, ymax - fy)] {
        if p == 0.0 {
            // parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }

    let at = |t: f64| {
        (
            (fx + t * dx).round().clamp(0.0, xmax) as i64,
            (fy + t * dy).round().clamp(0.0, ymax) as i64,
        )
    };
    let (sx, sy) = if t0 > 0.0 { at(t0) } else { (x0, y0) };
    let (ex, ey) = if t1 < 1.0 { at(t1) } else { (x1, y1) };
    Some((sx, sy, ex, ey))
}

/// Draws a line between two points using Bresenham's algorithm
/// Both endpoints are inclusive; the segment is clipped to the buffer first
pub fn draw_line(x0: i64, y0: i64, x1: i64, y1: i64, pixel_data: &mut PixelBuffer, color: u32) {
    let Some((mut x0, mut y0, x1, y1)) =
        clip_segment(x0, y0, x1, y1, pixel_data.width(), pixel_data.height())
    else {
        return;
    };
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        pixel_data.set(x0, y0, color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
