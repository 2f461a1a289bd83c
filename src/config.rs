//! Run configuration, loadable from and savable to JSON.
//!
//! Every field has a literal default, so a partial file (or none at all)
//! is a valid configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::physics::constants::*;
use crate::physics::LorenzParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lorenz: LorenzParams,
    pub canvas: CanvasConfig,
    pub animation: AnimationConfig,
    pub still: StillConfig,
    pub preview: PreviewConfig,
    pub sensitivity: SensitivityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frames: usize,
    pub trail_capacity: usize,
    pub warmup_steps: usize,
    /// Physics steps between consecutive rendered frames.
    pub substeps: usize,
    /// Display duration of each frame, in hundredths of a second.
    pub frame_delay_cs: u16,
    /// Log progress every this many frames (0 disables).
    pub progress_every: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: ANIMATION_FRAMES,
            trail_capacity: ANIMATION_TRAIL,
            warmup_steps: WARMUP_STEPS,
            substeps: ANIMATION_SUBSTEPS,
            frame_delay_cs: FRAME_DELAY_CS,
            progress_every: PROGRESS_EVERY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StillConfig {
    pub iterations: usize,
    pub warmup_steps: usize,
}

impl Default for StillConfig {
    fn default() -> Self {
        Self {
            iterations: STILL_ITERATIONS,
            warmup_steps: WARMUP_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub trail_capacity: usize,
    pub warmup_steps: usize,
    pub substeps: usize,
    pub frame_interval_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: PREVIEW_WIDTH,
            height: PREVIEW_HEIGHT,
            frames: PREVIEW_FRAMES,
            trail_capacity: PREVIEW_TRAIL,
            warmup_steps: WARMUP_STEPS,
            substeps: PREVIEW_SUBSTEPS,
            frame_interval_ms: PREVIEW_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Offset added to x0 of the second trajectory.
    pub perturbation: f64,
    pub samples: usize,
    /// Extra steps taken between two samples.
    pub sample_stride: usize,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            perturbation: 1e-4,
            samples: 20,
            sample_stride: 100,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Check the parameters every mode shares. Mode sections are checked by
    /// [`Config::validate_for`].
    pub fn validate(&self) -> Result<()> {
        let l = &self.lorenz;
        for (name, v) in [("sigma", l.sigma), ("rho", l.rho), ("beta", l.beta), ("dt", l.dt)] {
            if !v.is_finite() {
                bail!("lorenz.{name} must be finite, got {v}");
            }
        }
        if l.dt <= 0.0 {
            bail!("lorenz.dt must be positive, got {}", l.dt);
        }
        if !l.initial.is_finite() {
            bail!("lorenz.initial must be finite, got {:?}", l.initial);
        }
        Ok(())
    }

    /// Shared checks plus the sections `mode` reads.
    pub fn validate_for(&self, mode: Mode) -> Result<()> {
        self.validate()?;
        match mode {
            Mode::Animate => {
                self.canvas.validate()?;
                self.animation.validate()
            }
            Mode::Still => self.canvas.validate(),
            Mode::Sensitivity => self.sensitivity.validate(),
            Mode::Preview => self.preview.validate(),
        }
    }
}

/// Run mode, used to pick which config sections must be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Animate,
    Still,
    Sensitivity,
    Preview,
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("canvas must be non-empty, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            bail!("animation.frames must be at least 1");
        }
        if self.substeps == 0 {
            bail!("animation.substeps must be at least 1");
        }
        Ok(())
    }
}

impl PreviewConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("preview grid must be non-empty, got {}x{}", self.width, self.height);
        }
        if self.substeps == 0 {
            bail!("preview.substeps must be at least 1");
        }
        Ok(())
    }
}

impl SensitivityConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.perturbation.is_finite() {
            bail!("sensitivity.perturbation must be finite, got {}", self.perturbation);
        }
        Ok(())
    }
}
