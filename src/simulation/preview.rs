//! Terminal preview: the same trail, plotted as characters.

use anyhow::Result;
use log::info;
use std::io::Write;
use std::thread;
use std::time::Duration;

use super::warm_up;
use crate::config::PreviewConfig;
use crate::physics::{LorenzParams, LorenzSystem, Trail};
use crate::rendering::OrthoCamera;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Character for a trail point; newer points (intensity near 1) are heavier.
pub fn trail_char(intensity: f64) -> char {
    if intensity > 0.9 {
        '●'
    } else if intensity > 0.7 {
        '◆'
    } else if intensity > 0.5 {
        '▲'
    } else if intensity > 0.3 {
        '♦'
    } else {
        '·'
    }
}

/// Render the trail into `height` lines of `width` characters.
///
/// The top line carries the frame counter and is truncated to the width.
pub fn render_ascii_frame(trail: &Trail, width: usize, height: usize, frame_index: usize) -> Vec<String> {
    let mut grid = vec![vec![' '; width]; height];
    let camera = OrthoCamera::for_canvas(width, height);
    let len = trail.len();

    for (i, p) in trail.iter().enumerate() {
        let Some((x, y)) = camera.project(*p) else {
            continue;
        };
        if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
            continue;
        }
        grid[y as usize][x as usize] = trail_char(i as f64 / len as f64);
    }

    if let Some(top) = grid.first_mut() {
        let header = format!("Frame: {frame_index} | Lorenz Attractor");
        for (cell, ch) in top.iter_mut().zip(header.chars()) {
            *cell = ch;
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Animate the attractor in the terminal, writing each frame to `out`.
pub fn run_preview<W: Write>(params: &LorenzParams, config: &PreviewConfig, out: &mut W) -> Result<()> {
    info!(
        "Terminal preview: {} frames at {}x{}",
        config.frames, config.width, config.height
    );
    let mut system = LorenzSystem::new(*params, config.trail_capacity);
    warm_up(&mut system, config.warmup_steps);

    let interval = Duration::from_millis(config.frame_interval_ms);
    for frame in 0..config.frames {
        system.step_n(config.substeps);

        write!(out, "{CLEAR_SCREEN}")?;
        for line in render_ascii_frame(system.trail(), config.width, config.height, frame) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    Ok(())
}
