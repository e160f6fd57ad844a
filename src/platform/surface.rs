//=========================================================================
// Surface Renderer
//=========================================================================
//
// Presents game snapshots in the window through softbuffer.
//
// Pipeline:
// ```text
//   Frame ─► render::draw_scene ─► Canvas (logical size)
//                                    │ nearest-neighbour scale
//                                    ▼
//                        softbuffer surface (physical size) ─► present
// ```
//
// The canvas matches the drawable area in logical units; the surface
// matches the window's physical pixels, so HiDPI displays get an
// upscaled image rather than a smaller playfield.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;
use std::rc::Rc;

use log::debug;
use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::game::GameState;
use crate::render::{draw_scene, Canvas};

//=== RenderError =========================================================

/// Failures while creating or presenting the window surface.
#[derive(Debug)]
pub enum RenderError {
    /// softbuffer could not create, resize, or present the surface.
    Surface(SoftBufferError),

    /// The window reported a zero-sized inner area.
    ZeroSizedSurface,
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "Surface error: {}", e),
            Self::ZeroSizedSurface => write!(f, "Window surface has zero size"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::ZeroSizedSurface => None,
        }
    }
}

impl From<SoftBufferError> for RenderError {
    fn from(e: SoftBufferError) -> Self {
        Self::Surface(e)
    }
}

//=== SurfaceRenderer =====================================================

/// Owns the window, its softbuffer surface, and the logical canvas.
pub(crate) struct SurfaceRenderer {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    canvas: Canvas,
    physical_size: (u32, u32),
}

impl SurfaceRenderer {
    //--- Construction -----------------------------------------------------

    /// Creates a surface for `window` with a canvas of the given logical size.
    pub(crate) fn new(
        window: Rc<Window>,
        logical_width: u32,
        logical_height: u32,
    ) -> Result<Self, RenderError> {
        let context = Context::new(Rc::clone(&window))?;
        let surface = Surface::new(&context, Rc::clone(&window))?;

        Ok(Self {
            window,
            surface,
            canvas: Canvas::new(logical_width, logical_height),
            physical_size: (0, 0),
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    //--- Presentation -----------------------------------------------------

    /// Draws `state` and presents it.
    pub(crate) fn present(&mut self, state: &GameState) -> Result<(), RenderError> {
        draw_scene(&mut self.canvas, state);

        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Err(RenderError::ZeroSizedSurface);
        };

        if self.physical_size != (size.width, size.height) {
            debug!(
                target: "platform::render",
                "Resizing surface to {}x{} (canvas {}x{})",
                size.width,
                size.height,
                self.canvas.width(),
                self.canvas.height()
            );
            self.surface.resize(width, height)?;
            self.physical_size = (size.width, size.height);
        }

        let mut buffer = self.surface.buffer_mut()?;
        scale_nearest(&self.canvas, &mut buffer, size.width, size.height);
        buffer.present()?;
        Ok(())
    }
}

//=== Scaling =============================================================

/// Copies `canvas` into a `dst_width x dst_height` buffer, sampling the
/// nearest source pixel.
pub(crate) fn scale_nearest(canvas: &Canvas, dst: &mut [u32], dst_width: u32, dst_height: u32) {
    let src_width = canvas.width() as usize;
    let src_height = canvas.height() as usize;
    let dst_width = dst_width as usize;
    let dst_height = dst_height as usize;

    if src_width == 0 || src_height == 0 || dst_width == 0 {
        return;
    }

    let src = canvas.pixels();
    for (dy, row) in dst.chunks_exact_mut(dst_width).take(dst_height).enumerate() {
        let sy = dy * src_height / dst_height;
        let src_row = &src[sy * src_width..(sy + 1) * src_width];
        for (dx, pixel) in row.iter_mut().enumerate() {
            *pixel = src_row[dx * src_width / dst_width];
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn checker() -> Canvas {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Color::PINK);
        canvas.fill_rect(1, 0, 1, 1, Color::RED);
        canvas.fill_rect(0, 1, 1, 1, Color::BLUE);
        canvas
    }

    #[test]
    fn same_size_copy_is_identity() {
        let canvas = checker();
        let mut dst = vec![0; 4];

        scale_nearest(&canvas, &mut dst, 2, 2);

        assert_eq!(dst, canvas.pixels());
    }

    #[test]
    fn doubling_replicates_pixels() {
        let canvas = checker();
        let mut dst = vec![0; 16];

        scale_nearest(&canvas, &mut dst, 4, 4);

        let pink = Color::PINK.to_u32();
        let red = Color::RED.to_u32();
        let blue = Color::BLUE.to_u32();
        assert_eq!(&dst[0..4], &[pink, pink, red, red]);
        assert_eq!(&dst[4..8], &[pink, pink, red, red]);
        assert_eq!(&dst[8..12], &[blue, blue, pink, pink]);
        assert_eq!(&dst[12..16], &[blue, blue, pink, pink]);
    }

    #[test]
    fn empty_destination_is_noop() {
        let canvas = checker();
        let mut dst: Vec<u32> = Vec::new();
        scale_nearest(&canvas, &mut dst, 0, 0);
        assert!(dst.is_empty());
    }

    #[test]
    fn render_error_display() {
        assert_eq!(RenderError::ZeroSizedSurface.to_string(), "Window surface has zero size");
    }
}
