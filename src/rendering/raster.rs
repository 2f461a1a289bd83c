//! Integer drawing primitives over an indexed [`PixelBuffer`].
//!
//! Every primitive is total: pixels that fall outside the buffer are
//! skipped rather than reported.

use super::buffer::PixelBuffer;

/// Margin, in buffer sizes, that a line may extend past each edge before
/// its endpoints are clipped.
const CLIP_MARGIN: i64 = 2;

type Segment = ((i64, i64), (i64, i64));

/// Liang-Barsky clip of `p0 -> p1` to the closed rectangle `min..=max`.
fn clip_segment(p0: (i64, i64), p1: (i64, i64), min: (i64, i64), max: (i64, i64)) -> Option<Segment> {
    let (x0, y0) = (p0.0 as f64, p0.1 as f64);
    let (dx, dy) = ((p1.0 - p0.0) as f64, (p1.1 - p0.1) as f64);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    let edges = [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

/// Bresenham line from (x0, y0) to (x1, y1), both endpoints inclusive.
///
/// Each pixel on the discrete path is visited exactly once. Segments lying
/// wholly beyond one edge of the buffer are rejected without walking them.
/// Endpoints further than [`CLIP_MARGIN`] buffer sizes outside are clipped
/// first, so the walk stays proportional to the buffer size.
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, index: u8) {
    let (w, h) = (buf.width() as i64, buf.height() as i64);
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    if w == 0 || h == 0 {
        return;
    }
    if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
        return;
    }

    let (mx, my) = (w * CLIP_MARGIN, h * CLIP_MARGIN);
    let (min, max) = ((-mx, -my), (w - 1 + mx, h - 1 + my));
    let outside = |x: i64, y: i64| x < min.0 || y < min.1 || x > max.0 || y > max.1;
    let ((mut x0, mut y0), (x1, y1)) = if outside(x0, y0) || outside(x1, y1) {
        match clip_segment((x0, y0), (x1, y1), min, max) {
            Some(seg) => seg,
            None => return,
        }
    } else {
        ((x0, y0), (x1, y1))
    };

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        buf.put(x0, y0, index);
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

/// Filled disc: every (cx+dx, cy+dy) with dx² + dy² <= radius².
/// A negative radius draws nothing.
pub fn fill_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, index: u8) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                buf.put(cx + dx, cy + dy, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_pixels(buf: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (y, row) in buf.rows().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_horizontal_line_exact_pixels() {
        let mut buf = PixelBuffer::new(10, 4);
        draw_line(&mut buf, 0, 0, 5, 0, 7);
        assert_eq!(set_pixels(&buf), (0..=5).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_line_visits_each_step_once() {
        let mut buf = PixelBuffer::new(20, 20);
        draw_line(&mut buf, 2, 3, 15, 9, 1);
        let pixels = set_pixels(&buf);
        // one pixel per column for an x-major line
        assert_eq!(pixels.len(), 14);
        assert!(pixels.contains(&(2, 3)));
        assert!(pixels.contains(&(15, 9)));
    }

    #[test]
    fn test_line_direction_independent_endpoints() {
        let mut a = PixelBuffer::new(16, 16);
        draw_line(&mut a, 12, 1, 3, 14, 1);
        let pa = set_pixels(&a);
        assert!(pa.contains(&(12, 1)));
        assert!(pa.contains(&(3, 14)));
        // y-major line: one pixel per row
        assert_eq!(pa.len(), 14);
    }

    #[test]
    fn test_single_point_line() {
        let mut buf = PixelBuffer::new(4, 4);
        draw_line(&mut buf, 2, 2, 2, 2, 3);
        assert_eq!(set_pixels(&buf), vec![(2, 2)]);
    }

    #[test]
    fn test_line_clipped_to_buffer() {
        let mut buf = PixelBuffer::new(5, 5);
        draw_line(&mut buf, -3, 2, 8, 2, 1);
        assert_eq!(set_pixels(&buf), (0..5).map(|x| (x, 2)).collect::<Vec<_>>());
    }

    #[test]
    fn test_far_offscreen_line_is_rejected() {
        let mut buf = PixelBuffer::new(5, 5);
        draw_line(&mut buf, i32::MIN, -10, i32::MAX, -10, 1);
        draw_line(&mut buf, 100, i32::MIN, 200, i32::MAX, 1);
        assert!(buf.is_blank());
    }

    #[test]
    fn test_extreme_endpoints_are_clipped_before_walking() {
        let mut buf = PixelBuffer::new(5, 5);
        draw_line(&mut buf, i32::MIN, 2, i32::MAX, 2, 1);
        assert_eq!(set_pixels(&buf), (0..5).map(|x| (x, 2)).collect::<Vec<_>>());

        let mut buf = PixelBuffer::new(5, 5);
        draw_line(&mut buf, i32::MIN, i32::MIN, i32::MAX, i32::MAX, 1);
        assert_eq!(set_pixels(&buf), (0..5).map(|k| (k, k)).collect::<Vec<_>>());
    }

    #[test]
    fn test_clip_segment_keeps_inner_segments() {
        let seg = clip_segment((1, 1), (3, 4), (0, 0), (9, 9));
        assert_eq!(seg, Some(((1, 1), (3, 4))));
        assert_eq!(clip_segment((-5, 20), (20, 20), (0, 0), (9, 9)), None);
        assert_eq!(clip_segment((-5, 3), (20, 3), (0, 0), (9, 9)), Some(((0, 3), (9, 3))));
    }

    #[test]
    fn test_empty_buffer_draws_nothing() {
        let mut buf = PixelBuffer::new(0, 0);
        draw_line(&mut buf, -1, -1, 1, 1, 1);
        assert!(buf.is_blank());
    }

    #[test]
    fn test_circle_radius_zero_is_one_pixel() {
        let mut buf = PixelBuffer::new(5, 5);
        fill_circle(&mut buf, 2, 2, 0, 9);
        assert_eq!(set_pixels(&buf), vec![(2, 2)]);
    }

    #[test]
    fn test_circle_radius_three() {
        let mut buf = PixelBuffer::new(20, 20);
        fill_circle(&mut buf, 10, 10, 3, 255);
        // integer points inside x^2 + y^2 <= 9
        assert_eq!(buf.count_non_background(), 29);
        assert_eq!(buf.get(13, 10), Some(255));
        assert_eq!(buf.get(13, 12), Some(0));
    }

    #[test]
    fn test_circle_partially_outside_is_clipped() {
        let mut buf = PixelBuffer::new(10, 10);
        fill_circle(&mut buf, -2, 5, 4, 1);
        let pixels = set_pixels(&buf);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            let (dx, dy) = (x as i64 + 2, y as i64 - 5);
            assert!(dx * dx + dy * dy <= 16);
        }
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut buf = PixelBuffer::new(4, 4);
        fill_circle(&mut buf, 1, 1, -1, 1);
        assert!(buf.is_blank());
    }
}
