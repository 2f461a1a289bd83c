//! Physics module for the Lorenz simulation
//!
//! This module owns the numerical side of the project: the Lorenz
//! equations, the fixed-step integrator and the bounded trail of recent
//! positions it produces.

pub mod constants;
pub mod lorenz;
pub mod trail;

// Re-export commonly used items
pub use lorenz::{LorenzParams, LorenzSystem};
pub use trail::Trail;

/// A position in Lorenz phase space. Produced by a step and never mutated afterwards.
pub type Point3D = glam::DVec3;
