//! Writing rendered rasters to disk.
//!
//! Renderers produce indexed [`PixelBuffer`]s; a [`RasterSink`] expands them
//! through a [`Palette`] and encodes them. [`ImageFileSink`] writes PNG stills
//! and looping GIF animations with the `image` crate.

use anyhow::{anyhow, bail, Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, ImageFormat, RgbaImage};
use log::info;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::rendering::{Palette, PixelBuffer};
use crate::simulation::FrameSequence;

/// GIF quantizer speed, 1 (best) to 30 (fastest).
const GIF_SPEED: i32 = 10;

/// Destination for finished rasters.
pub trait RasterSink {
    fn write_still(&mut self, buffer: &PixelBuffer, palette: &Palette) -> Result<()>;
    fn write_sequence(&mut self, frames: &FrameSequence, palette: &Palette) -> Result<()>;
}

/// Writes to a single file; the format of stills follows the extension.
#[derive(Debug, Clone)]
pub struct ImageFileSink {
    path: PathBuf,
}

impl ImageFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

fn to_image(buffer: &PixelBuffer, palette: &Palette) -> Result<RgbaImage> {
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    RgbaImage::from_raw(w, h, palette.to_rgba(buffer))
        .ok_or_else(|| anyhow!("Pixel data does not fit a {w}x{h} image"))
}

impl RasterSink for ImageFileSink {
    fn write_still(&mut self, buffer: &PixelBuffer, palette: &Palette) -> Result<()> {
        let format = ImageFormat::from_path(&self.path)
            .with_context(|| format!("Unknown image format for {}", self.path.display()))?;
        let img = to_image(buffer, palette)?;

        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, format).context("Failed to encode image")?;
        std::fs::write(&self.path, bytes.into_inner())
            .with_context(|| format!("Failed to write output file {}", self.path.display()))?;
        info!("Saved {}", self.path.display());
        Ok(())
    }

    fn write_sequence(&mut self, frames: &FrameSequence, palette: &Palette) -> Result<()> {
        if frames.is_empty() {
            bail!("No frames to encode");
        }

        // the file is written once, after the last frame is encoded
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, GIF_SPEED);
            encoder
                .set_repeat(Repeat::Infinite)
                .context("Failed to set GIF loop mode")?;

            for (i, frame) in frames.iter().enumerate() {
                let img = to_image(&frame.buffer, palette)?;
                let delay = Delay::from_numer_denom_ms(frame.delay_cs as u32 * 10, 1);
                encoder
                    .encode_frame(image::Frame::from_parts(img, 0, 0, delay))
                    .with_context(|| format!("Failed to encode frame {i}"))?;
            }
        }

        std::fs::write(&self.path, &bytes)
            .with_context(|| format!("Failed to write output file {}", self.path.display()))?;
        info!("Saved {} ({} frames)", self.path.display(), frames.len());
        Ok(())
    }
}
