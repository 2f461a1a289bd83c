//! Static image mode: a long trajectory plotted point by point.

use anyhow::Result;
use log::info;

use super::warm_up;
use crate::config::StillConfig;
use crate::export::RasterSink;
use crate::physics::{LorenzParams, LorenzSystem};
use crate::rendering::palette::intensity_index;
use crate::rendering::{OrthoCamera, Palette, PixelBuffer};

/// Depth shading from the (unprojected) y coordinate.
#[inline]
pub fn depth_index(y: f64) -> Option<u8> {
    intensity_index((y + 30.0) * 3.0)
}

pub fn render_still(params: &LorenzParams, config: &StillConfig, width: usize, height: usize) -> PixelBuffer {
    // no trail needed: every point is plotted as soon as it is produced
    let mut system = LorenzSystem::new(*params, 0);
    warm_up(&mut system, config.warmup_steps);

    let camera = OrthoCamera::for_canvas(width, height);
    let mut buf = PixelBuffer::new(width, height);
    for _ in 0..config.iterations {
        let p = system.step();
        let (Some((x, y)), Some(index)) = (camera.project(p), depth_index(p.y)) else {
            continue;
        };
        buf.put(x as i64, y as i64, index);
    }
    buf
}

/// Render the still image and write it through `sink` with the depth palette.
pub fn render_still_to<S: RasterSink + ?Sized>(
    params: &LorenzParams,
    config: &StillConfig,
    width: usize,
    height: usize,
    sink: &mut S,
) -> Result<()> {
    info!("Rendering {} points to a {}x{} still", config.iterations, width, height);
    let buf = render_still(params, config, width, height);
    sink.write_still(&buf, &Palette::depth())
}
