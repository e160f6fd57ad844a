//=========================================================================
// Text
//=========================================================================
//
// Rasterizes short strings onto a `Canvas` with an embedded TrueType
// font (DejaVu Sans, see assets/DejaVuSans-LICENSE.txt).
//
// The font is parsed once, lazily. If parsing fails the failure is
// logged once and text drawing becomes a no-op; the game keeps running.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::OnceLock;

use log::error;
use rusttype::{point, Font, Scale};

//=== Internal Dependencies ===============================================

use super::canvas::{Canvas, Color};

//=== Font ================================================================

const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Glyph coverage below this is treated as empty.
const COVERAGE_THRESHOLD: f32 = 0.05;

fn font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let font = Font::try_from_bytes(FONT_DATA);
        if font.is_none() {
            error!(target: "render", "Embedded font could not be parsed; text disabled");
        }
        font
    })
    .as_ref()
}

//=== draw_text() =========================================================

/// Draws `text` with its baseline starting at (x, baseline), `size`
/// pixels tall. Glyphs are clipped to the canvas. Does nothing when no
/// font is available.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, baseline: i32, size: f32, color: Color) {
    let Some(font) = font() else {
        return;
    };
    let scale = Scale::uniform(size);
    let origin = point(x as f32, baseline as f32);

    for glyph in font.layout(text, scale, origin) {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            if coverage > COVERAGE_THRESHOLD {
                canvas.blend_pixel(
                    bounds.min.x + gx as i32,
                    bounds.min.y + gy as i32,
                    color,
                    coverage,
                );
            }
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
