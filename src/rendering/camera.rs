use crate::physics::constants::{X_SPAN, Z_BASELINE, Z_SPAN};
use crate::physics::Point3D;

/// Fixed orthographic camera looking along -Y at the X-Z plane.
///
/// X is scaled to the image width and centred; Z is scaled to the height
/// and flipped so the wings of the attractor reach upward from a baseline
/// near the bottom of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub scale_x: f64,
    pub scale_z: f64,
    pub center_x: f64,
    pub baseline_z: f64,
}

impl OrthoCamera {
    pub fn for_canvas(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            scale_x: w / X_SPAN,
            scale_z: h / Z_SPAN,
            center_x: w / 2.0,
            baseline_z: h * Z_BASELINE,
        }
    }

    /// Unclamped pixel coordinate of `p`, or `None` if it is not finite.
    #[inline]
    pub fn project(&self, p: Point3D) -> Option<(i32, i32)> {
        let px = p.x * self.scale_x + self.center_x;
        let py = self.baseline_z - p.z * self.scale_z;
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        // truncation toward zero; huge values saturate
        Some((px as i32, py as i32))
    }
}

/// Project a phase-space point onto a `width` x `height` canvas.
///
/// Pure function of its inputs. The result may lie off-canvas; callers
/// writing pixels rely on the buffer's clipping.
pub fn project(p: Point3D, width: usize, height: usize) -> Option<(i32, i32)> {
    OrthoCamera::for_canvas(width, height).project(p)
}
