use super::buffer::PixelBuffer;
use super::camera::OrthoCamera;
use super::font::draw_text;
use super::palette::intensity_index;
use super::raster::{draw_line, fill_circle};
use crate::physics::Trail;

pub const TITLE: &str = "Lorenz Attractor Animation";

pub const MARKER_RADIUS: i32 = 3;
pub const MARKER_INDEX: u8 = 255;
pub const COUNTER_ORIGIN: (i32, i32) = (10, 20);
pub const COUNTER_INDEX: u8 = 200;
pub const TITLE_ORIGIN: (i32, i32) = (10, 35);
pub const TITLE_INDEX: u8 = 150;

/// Segments with an endpoint further than this many canvas sizes away are dropped.
pub const GUARD_FACTOR: i64 = 16;

/// Palette index for the segment ending at trail position `i` of `len`.
///
/// Recency `i / len` is mapped onto `1..255`: the oldest segment sits just
/// above the background, the newest just below full brightness.
pub fn trail_color_index(i: usize, len: usize) -> Option<u8> {
    if len == 0 {
        return None;
    }
    intensity_index(i as f64 / len as f64 * 254.0 + 1.0)
}

fn within_guard(p: (i32, i32), width: usize, height: usize) -> bool {
    let (gw, gh) = (width as i64 * GUARD_FACTOR, height as i64 * GUARD_FACTOR);
    let (x, y) = (p.0 as i64, p.1 as i64);
    x >= -gw && x <= width as i64 + gw && y >= -gh && y <= height as i64 + gh
}

/// Render one animation frame from a read-only view of the trail.
///
/// Trails shorter than two points yield a blank buffer with no overlay.
pub fn build_frame(trail: &Trail, width: usize, height: usize, frame_index: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    let len = trail.len();
    if len < 2 {
        return buf;
    }

    let camera = OrthoCamera::for_canvas(width, height);
    let projected: Vec<Option<(i32, i32)>> = trail
        .iter()
        .map(|&p| camera.project(p).filter(|&q| within_guard(q, width, height)))
        .collect();

    for (i, pair) in projected.windows(2).enumerate().map(|(k, w)| (k + 1, w)) {
        let (Some(a), Some(b)) = (pair[0], pair[1]) else {
            continue;
        };
        if let Some(index) = trail_color_index(i, len) {
            draw_line(&mut buf, a.0, a.1, b.0, b.1, index);
        }
    }

    if let Some(Some((x, y))) = projected.last() {
        fill_circle(&mut buf, *x, *y, MARKER_RADIUS, MARKER_INDEX);
    }

    let counter = format!("Frame: {frame_index}");
    draw_text(&mut buf, COUNTER_ORIGIN.0, COUNTER_ORIGIN.1, &counter, COUNTER_INDEX);
    draw_text(&mut buf, TITLE_ORIGIN.0, TITLE_ORIGIN.1, TITLE, TITLE_INDEX);

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{LorenzParams, LorenzSystem, Point3D};
    use crate::rendering::camera::project;

    #[test]
    fn test_short_trails_give_blank_frames() {
        let blank = PixelBuffer::new(64, 48);
        let empty = Trail::with_capacity(10);
        assert_eq!(build_frame(&empty, 64, 48, 0), blank);

        let mut one = Trail::with_capacity(10);
        one.push(Point3D::new(0.0, 0.0, 20.0));
        assert_eq!(build_frame(&one, 64, 48, 7), blank);
    }

    #[test]
    fn test_color_index_range() {
        let len = 2000;
        let indices: Vec<u8> = (1..len).map(|i| trail_color_index(i, len).unwrap()).collect();
        assert_eq!(indices[0], 1);
        assert!(*indices.last().unwrap() <= 254);
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(trail_color_index(0, 0), None);
    }

    #[test]
    fn test_frame_draws_trail_marker_and_overlay() {
        let mut sys = LorenzSystem::new(LorenzParams::default(), 500);
        sys.step_n(1500);
        let frame = build_frame(sys.trail(), 800, 600, 42);
        assert!(!frame.is_blank());

        let (x, y) = project(sys.position(), 800, 600).unwrap();
        let under_overlay = x < 200 && (20..40).contains(&y);
        if !under_overlay {
            assert_eq!(frame.get(x as i64, y as i64), Some(MARKER_INDEX));
        }

        // 'F' of the counter: top row is fully lit
        assert_eq!(frame.get(10, 20), Some(COUNTER_INDEX));
        assert_eq!(frame.get(12, 20), Some(COUNTER_INDEX));
        // 'L' of the title: left column
        assert_eq!(frame.get(10, 39), Some(TITLE_INDEX));
    }

    #[test]
    fn test_frame_does_not_mutate_trail() {
        let mut sys = LorenzSystem::new(LorenzParams::default(), 100);
        sys.step_n(300);
        let before: Vec<Point3D> = sys.trail().iter().copied().collect();
        let _ = build_frame(sys.trail(), 320, 240, 1);
        let after: Vec<Point3D> = sys.trail().iter().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let trail: Trail = vec![
            Point3D::new(0.0, 0.0, 10.0),
            Point3D::new(f64::NAN, 0.0, 10.0),
            Point3D::new(f64::INFINITY, 0.0, f64::NEG_INFINITY),
            Point3D::new(1e300, 0.0, -1e300),
            Point3D::new(5.0, 0.0, 12.0),
            Point3D::new(6.0, 0.0, 14.0),
        ]
        .into_iter()
        .collect();
        let frame = build_frame(&trail, 200, 150, 3);
        let bbox = frame.bounding_box().unwrap();
        assert!(bbox.max_x < 200 && bbox.max_y < 150);
    }

    #[test]
    fn test_offscreen_marker_is_clipped() {
        let trail: Trail = vec![Point3D::new(-100.0, 0.0, 10.0), Point3D::new(-90.0, 0.0, 10.0)]
            .into_iter()
            .collect();
        let frame = build_frame(&trail, 100, 100, 0);
        // only the overlay text lands on the canvas
        let bbox = frame.bounding_box().unwrap();
        assert!(bbox.min_x >= 10);
    }
}
