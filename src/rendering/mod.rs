//! Rendering module: projection and software rasterization
//!
//! Everything here draws into an indexed [`PixelBuffer`]; turning that into
//! an image file is left to [`crate::export`].

pub mod buffer;
pub mod camera;
pub mod font;
pub mod frame;
pub mod palette;
pub mod raster;

pub use buffer::{BoundingBox, PixelBuffer, BACKGROUND};
pub use camera::{project, OrthoCamera};
pub use frame::build_frame;
pub use palette::Palette;
