//! 256-entry palettes mapping buffer indices to displayable colours.
//!
//! Index 0 is always opaque black and is reserved for the background.

use rayon::prelude::*;

use super::buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 4]; 256],
}

impl Palette {
    /// Cyclic sine gradient used for the animated trail.
    pub fn rainbow() -> Self {
        let mut colors = [[0, 0, 0, 255]; 256];
        for (i, c) in colors.iter_mut().enumerate().skip(1) {
            let t = i as f64 / 255.0;
            let tau = std::f64::consts::TAU;
            let r = ((t * tau).sin() * 127.0 + 128.0) as u8;
            let g = ((t * tau + tau / 3.0).sin() * 127.0 + 128.0) as u8;
            let b = ((t * tau + 2.0 * tau / 3.0).sin() * 127.0 + 128.0) as u8;
            *c = [r, g, b, 255];
        }
        Self { colors }
    }

    /// Warm-to-cool ramp used by the still image: index i -> (i, i/2, 255 - i).
    pub fn depth() -> Self {
        let mut colors = [[0, 0, 0, 255]; 256];
        for (i, c) in colors.iter_mut().enumerate().skip(1) {
            let v = i as u8;
            *c = [v, v / 2, 255 - v, 255];
        }
        Self { colors }
    }

    #[inline]
    pub fn color(&self, index: u8) -> [u8; 4] {
        self.colors[index as usize]
    }

    /// Expand an indexed buffer into tightly packed RGBA8 rows.
    pub fn to_rgba(&self, buffer: &PixelBuffer) -> Vec<u8> {
        let width = buffer.width();
        let mut out = vec![0u8; width * buffer.height() * 4];
        if width == 0 {
            return out;
        }
        out.par_chunks_exact_mut(width * 4)
            .zip(buffer.pixels().par_chunks_exact(width))
            .for_each(|(row, src)| {
                for (dst, &idx) in row.chunks_exact_mut(4).zip(src) {
                    dst.copy_from_slice(&self.colors[idx as usize]);
                }
            });
        out
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rainbow()
    }
}

/// Clamp a raw intensity into a drawable palette index.
///
/// NaN has no meaningful colour and yields `None` (leave as background).
/// Everything else is truncated and clamped into `1..=255`, so a drawn
/// pixel never collides with the background index.
pub fn intensity_index(value: f64) -> Option<u8> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(1.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_black() {
        assert_eq!(Palette::rainbow().color(0), [0, 0, 0, 255]);
        assert_eq!(Palette::depth().color(0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_depth_ramp() {
        let p = Palette::depth();
        assert_eq!(p.color(1), [1, 0, 254, 255]);
        assert_eq!(p.color(200), [200, 100, 55, 255]);
        assert_eq!(p.color(255), [255, 127, 0, 255]);
    }

    #[test]
    fn test_rainbow_entries_are_opaque_and_not_black() {
        let p = Palette::rainbow();
        for i in 1..=255u8 {
            let c = p.color(i);
            assert_eq!(c[3], 255);
            assert_ne!(&c[..3], &[0, 0, 0]);
        }
    }

    #[test]
    fn test_intensity_index_clamps() {
        assert_eq!(intensity_index(f64::NAN), None);
        assert_eq!(intensity_index(f64::INFINITY), Some(255));
        assert_eq!(intensity_index(f64::NEG_INFINITY), Some(1));
        assert_eq!(intensity_index(-40.0), Some(1));
        assert_eq!(intensity_index(0.0), Some(1));
        assert_eq!(intensity_index(87.9), Some(87));
        assert_eq!(intensity_index(1e9), Some(255));
    }

    #[test]
    fn test_to_rgba_layout() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.put(2, 1, 10);
        let p = Palette::depth();
        let rgba = p.to_rgba(&buf);
        assert_eq!(rgba.len(), 3 * 2 * 4);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        let last = (1 * 3 + 2) * 4;
        assert_eq!(&rgba[last..last + 4], &p.color(10));
    }
}
