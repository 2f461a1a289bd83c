//! Simulation module: run protocols built on the integrator
//!
//! This module ties physics and rendering together. It drives the
//! integrator through warm-up and stepping, and hands finished rasters to a
//! [`crate::export::RasterSink`].

pub mod animation;
pub mod preview;
pub mod sensitivity;
pub mod still;

pub use animation::{AnimationDriver, Frame, FrameSequence};
pub use sensitivity::{compare_trajectories, divergence_after, DivergenceSample};
pub use still::render_still;

use log::debug;

use crate::physics::LorenzSystem;

/// Skip the transient: advance `steps` and discard them from the trail.
///
/// Callers do this once before the trajectory is used visually, so that
/// drawing starts on the attractor rather than on the approach to it.
pub fn warm_up(system: &mut LorenzSystem, steps: usize) {
    system.step_n(steps);
    system.reset_trail();
    debug!(
        "warm-up: skipped {} steps, now at ({:.3}, {:.3}, {:.3})",
        steps,
        system.position().x,
        system.position().y,
        system.position().z
    );
}
