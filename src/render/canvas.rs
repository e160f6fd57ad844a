//=========================================================================
// Canvas
//=========================================================================
//
// CPU pixel buffer in `0x00RRGGBB` format (the layout softbuffer
// presents). All drawing clips to the canvas bounds; callers may pass
// coordinates anywhere in i32 space.
//
//=========================================================================

//=== Color ===============================================================

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const PINK: Self = Self::rgb(255, 175, 175);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs to softbuffer's `0x00RRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Mixes `self` over `background` by `coverage` in [0, 1].
    pub fn blend_over(self, background: u32, coverage: f32) -> u32 {
        let coverage = coverage.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u32| -> u32 {
            let bg = (bg & 0xFF) as f32;
            (bg + (f32::from(fg) - bg) * coverage).round() as u32
        };
        (mix(self.r, background >> 16) << 16)
            | (mix(self.g, background >> 8) << 8)
            | mix(self.b, background)
    }
}

//=== Canvas ==============================================================

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    //--- Primitives -------------------------------------------------------

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_u32());
    }

    /// Fills the rectangle with top-left (x, y) and the given size.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let Some((x0, x1)) = Self::clip_span(x, width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(y, height, self.height) else {
            return;
        };

        let packed = color.to_u32();
        let stride = self.width as usize;
        for row in y0..y1 {
            let start = row * stride;
            self.pixels[start + x0..start + x1].fill(packed);
        }
    }

    /// Fills the ellipse inscribed in the given bounding box.
    ///
    /// A pixel is inside when its center lies within the ellipse.
    pub fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }

        let rx = f64::from(width) / 2.0;
        let ry = f64::from(height) / 2.0;
        let cx = f64::from(x) + rx;
        let cy = f64::from(y) + ry;
        let packed = color.to_u32();

        for py in y..y.saturating_add(height) {
            for px in x..x.saturating_add(width) {
                let dx = (f64::from(px) + 0.5 - cx) / rx;
                let dy = (f64::from(py) + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    if let Some(i) = self.index(px, py) {
                        self.pixels[i] = packed;
                    }
                }
            }
        }
    }

    /// Blends `color` into one pixel with the given coverage. Ignores
    /// pixels outside the canvas.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.blend_over(self.pixels[i], coverage);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Clips `[start, start + len)` to `[0, limit)`.
    fn clip_span(start: i32, len: i32, limit: u32) -> Option<(usize, usize)> {
        if len <= 0 {
            return None;
        }
        let lo = i64::from(start).max(0);
        let hi = (i64::from(start) + i64::from(len)).min(i64::from(limit));
        (lo < hi).then_some((lo as usize, hi as usize))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
