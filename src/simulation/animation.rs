use anyhow::Result;
use log::info;

use super::warm_up;
use crate::config::AnimationConfig;
use crate::export::RasterSink;
use crate::physics::{LorenzParams, LorenzSystem};
use crate::rendering::{build_frame, Palette, PixelBuffer};

/// One rendered frame and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub buffer: PixelBuffer,
    /// Hundredths of a second.
    pub delay_cs: u16,
}

/// Append-only, ordered list of frames produced by one animation run.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            frames: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, buffer: PixelBuffer, delay_cs: u16) {
        self.frames.push(Frame { buffer, delay_cs });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Total display time in hundredths of a second.
    pub fn duration_cs(&self) -> u64 {
        self.frames.iter().map(|f| f.delay_cs as u64).sum()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Steps a fresh integrator and renders the fading-trail animation.
pub struct AnimationDriver {
    params: LorenzParams,
    config: AnimationConfig,
}

impl AnimationDriver {
    pub fn new(params: LorenzParams, config: AnimationConfig) -> Self {
        Self { params, config }
    }

    /// Render `frame_count` frames of `width` x `height`.
    ///
    /// Each call starts from the configured initial point, so repeated runs
    /// are identical.
    pub fn run(&self, width: usize, height: usize, frame_count: usize) -> FrameSequence {
        info!("Creating Lorenz attractor animation with {frame_count} frames...");

        let mut system = LorenzSystem::new(self.params, self.config.trail_capacity);
        warm_up(&mut system, self.config.warmup_steps);

        let mut frames = FrameSequence::with_capacity(frame_count);
        for frame in 0..frame_count {
            system.step_n(self.config.substeps);
            let buffer = build_frame(system.trail(), width, height, frame);
            frames.push(buffer, self.config.frame_delay_cs);

            let every = self.config.progress_every;
            if every > 0 && frame % every == 0 {
                info!("Progress: {}/{} frames", frame + 1, frame_count);
            }
        }
        frames
    }

    /// Run the configured number of frames and hand them to `sink`.
    /// Encoding failures are returned unchanged.
    pub fn render_to<S: RasterSink + ?Sized>(&self, width: usize, height: usize, sink: &mut S) -> Result<()> {
        let frames = self.run(width, height, self.config.frames);
        info!("Encoding {} frames...", frames.len());
        sink.write_sequence(&frames, &Palette::rainbow())
    }
}
