/// Palette index reserved for the background.
pub const BACKGROUND: u8 = 0;

/// Indexed-colour raster. Writes outside the grid are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

/// Inclusive pixel bounds of the non-background content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

impl PixelBuffer {
    /// Buffer of `width * height` pixels, all background.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write one pixel; a no-op when (x, y) is off the grid.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, index: u8) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = index;
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == BACKGROUND)
    }

    pub fn count_non_background(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != BACKGROUND).count()
    }

    /// Bounds of every non-background pixel, `None` for a blank buffer.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for (i, &p) in self.pixels.iter().enumerate() {
            if p == BACKGROUND {
                continue;
            }
            let (x, y) = (i % self.width, i / self.width);
            bbox = Some(match bbox {
                None => BoundingBox { min_x: x, min_y: y, max_x: x, max_y: y },
                Some(b) => BoundingBox {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            });
        }
        bbox
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.width.max(1))
    }
}
