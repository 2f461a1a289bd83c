//! Default constants for the simulation.
//!
//! Classic Lorenz regime plus the run-protocol defaults used by every mode.

// ---------------------------------------------------------------------------
// Lorenz Parameters (classic chaotic regime)
// ---------------------------------------------------------------------------
pub const SIGMA: f64 = 10.0; // Prandtl number
pub const RHO: f64 = 28.0; // Rayleigh number
pub const BETA: f64 = 8.0 / 3.0; // Geometric factor

// ---------------------------------------------------------------------------
// Numerical / Integration Constants
// ---------------------------------------------------------------------------
pub const DEFAULT_DT: f64 = 0.01; // Forward Euler step
pub const DEFAULT_INITIAL: [f64; 3] = [1.0, 1.0, 1.0];
pub const WARMUP_STEPS: usize = 1000; // Transient skip before visual use

// ---------------------------------------------------------------------------
// Attractor Extents (approximate, used by the fixed camera)
// ---------------------------------------------------------------------------
pub const X_SPAN: f64 = 50.0; // X roughly -25..25
pub const Z_SPAN: f64 = 60.0; // Z roughly 0..50, with headroom
pub const Z_BASELINE: f64 = 0.8; // Fraction of height where z = 0 lands

// ---------------------------------------------------------------------------
// Animation Constants
// ---------------------------------------------------------------------------
pub const ANIMATION_TRAIL: usize = 2000;
pub const ANIMATION_SUBSTEPS: usize = 10;
pub const ANIMATION_FRAMES: usize = 360;
pub const FRAME_DELAY_CS: u16 = 5; // 50 ms per frame
pub const PROGRESS_EVERY: usize = 10;

// ---------------------------------------------------------------------------
// Still Image / Preview Constants
// ---------------------------------------------------------------------------
pub const STILL_ITERATIONS: usize = 50_000;
pub const PREVIEW_TRAIL: usize = 100;
pub const PREVIEW_SUBSTEPS: usize = 5;
pub const PREVIEW_FRAMES: usize = 1000;
pub const PREVIEW_INTERVAL_MS: u64 = 30;

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------
pub const DEFAULT_WIDTH: usize = 800;
pub const DEFAULT_HEIGHT: usize = 600;
pub const PREVIEW_WIDTH: usize = 80;
pub const PREVIEW_HEIGHT: usize = 24;
