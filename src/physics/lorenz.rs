use serde::{Deserialize, Serialize};

use super::constants::*;
use super::{Point3D, Trail};

/// Physical parameters, step size and starting point of one Lorenz run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub dt: f64,
    pub initial: Point3D,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: SIGMA,
            rho: RHO,
            beta: BETA,
            dt: DEFAULT_DT,
            initial: Point3D::from_array(DEFAULT_INITIAL),
        }
    }
}

impl LorenzParams {
    /// Same parameters with a different starting point.
    pub fn with_initial(mut self, initial: Point3D) -> Self {
        self.initial = initial;
        self
    }

    /// Right-hand side of the Lorenz equations.
    #[inline]
    pub fn derivative(&self, p: Point3D) -> Point3D {
        Point3D::new(
            self.sigma * (p.y - p.x),
            p.x * (self.rho - p.z) - p.y,
            p.x * p.y - self.beta * p.z,
        )
    }

    /// One forward Euler step from `p`. Pure state transition.
    ///
    /// Accuracy is first order in `dt`; callers that care about fidelity
    /// must shrink the step. Overflow is not trapped and surfaces as
    /// non-finite coordinates.
    #[inline]
    pub fn advance(&self, p: Point3D) -> Point3D {
        let d = self.derivative(p);
        Point3D::new(p.x + d.x * self.dt, p.y + d.y * self.dt, p.z + d.z * self.dt)
    }
}

/// Mutable integrator: current position plus the trail it has produced.
///
/// Each instance owns its state outright; two systems never share a trail.
#[derive(Debug, Clone)]
pub struct LorenzSystem {
    params: LorenzParams,
    position: Point3D,
    trail: Trail,
    steps: u64,
}

impl LorenzSystem {
    pub fn new(params: LorenzParams, trail_capacity: usize) -> Self {
        Self {
            params,
            position: params.initial,
            trail: Trail::with_capacity(trail_capacity),
            steps: 0,
        }
    }

    /// Advance one time step, record the new point in the trail and return it.
    pub fn step(&mut self) -> Point3D {
        self.position = self.params.advance(self.position);
        self.trail.push(self.position);
        self.steps += 1;
        self.position
    }

    /// Advance `n` steps, returning the last point (or the current one if `n == 0`).
    pub fn step_n(&mut self, n: usize) -> Point3D {
        for _ in 0..n {
            self.step();
        }
        self.position
    }

    pub fn reset_trail(&mut self) {
        self.trail.clear();
    }

    #[inline]
    pub fn position(&self) -> Point3D {
        self.position
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Steps taken since construction.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time elapsed since construction.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.params.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_matches_equations() {
        let mut sys = LorenzSystem::new(LorenzParams::default(), 10);
        let p = sys.step();
        // from (1,1,1): dx = 0, dy = 26, dz = 1 - 8/3
        assert_eq!(p.x, 1.0);
        assert!((p.y - 1.26).abs() < 1e-12);
        assert!((p.z - (1.0 + (1.0 - 8.0 / 3.0) * 0.01)).abs() < 1e-12);
        assert_eq!(sys.trail().len(), 1);
        assert_eq!(sys.steps(), 1);
    }

    #[test]
    fn test_step_and_advance_agree() {
        let params = LorenzParams::default();
        let mut sys = LorenzSystem::new(params, 0);
        let mut state = params.initial;
        for _ in 0..500 {
            state = params.advance(state);
            assert_eq!(sys.step(), state);
        }
    }

    #[test]
    fn test_trail_bounded_by_capacity() {
        let mut sys = LorenzSystem::new(LorenzParams::default(), 50);
        for n in 1..=200usize {
            sys.step();
            assert_eq!(sys.trail().len(), n.min(50));
        }
        assert_eq!(sys.trail().newest().copied(), Some(sys.position()));
    }

    #[test]
    fn test_deterministic_trajectories() {
        let params = LorenzParams::default();
        let mut a = LorenzSystem::new(params, 16);
        let mut b = LorenzSystem::new(params, 16);
        for _ in 0..5000 {
            let pa = a.step();
            let pb = b.step();
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
            assert_eq!(pa.z.to_bits(), pb.z.to_bits());
        }
    }

    #[test]
    fn test_stays_on_attractor_scale() {
        let mut sys = LorenzSystem::new(LorenzParams::default(), 0);
        for _ in 0..20_000 {
            let p = sys.step();
            assert!(p.is_finite());
            assert!(p.x.abs() < 60.0 && p.y.abs() < 60.0 && p.z.abs() < 80.0);
        }
    }

    #[test]
    fn test_pathological_params_go_non_finite_without_panic() {
        let params = LorenzParams {
            dt: 10.0,
            ..LorenzParams::default()
        };
        let mut sys = LorenzSystem::new(params, 8);
        let p = sys.step_n(200);
        assert!(!p.is_finite());
        assert_eq!(sys.trail().len(), 8);
    }

    #[test]
    fn test_params_json_defaults() {
        let params: LorenzParams = serde_json::from_str(r#"{"rho": 14.0}"#).unwrap();
        assert_eq!(params.rho, 14.0);
        assert_eq!(params.sigma, SIGMA);
        assert_eq!(params.initial, Point3D::new(1.0, 1.0, 1.0));
    }
}
