//! Lorenz attractor integrator with a fading-trail raster renderer.
//!
//! - [`physics`]: the Lorenz equations, a forward Euler integrator and the
//!   bounded trail of recent positions.
//! - [`rendering`]: fixed X-Z projection, indexed pixel buffers, line/circle
//!   rasterization, a tiny bitmap font and the per-frame composition.
//! - [`simulation`]: run protocols (animation, still image, sensitivity
//!   comparison, terminal preview).
//! - [`export`]: PNG/GIF output.
//! - [`config`]: JSON configuration with defaults for every mode.

pub mod config;
pub mod export;
pub mod physics;
pub mod rendering;
pub mod simulation;

pub use config::Config;
pub use physics::{LorenzParams, LorenzSystem, Point3D, Trail};
