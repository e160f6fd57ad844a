//=========================================================================
// Render Pass
//=========================================================================
//
// Paints a game snapshot onto a CPU canvas sized to the drawable area.
//
// Draw order:
// ```text
//   background ─► paddle ─► ball ─► "hits: N" ─► "highest: N"
// ```
//
// Pure function of the snapshot; presenting the canvas on screen is the
// platform's job.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod canvas;
pub mod text;

//=== Public API ==========================================================

pub use canvas::{Canvas, Color};

//=== Internal Dependencies ===============================================

use crate::core::game::GameState;

//=== Layout ==============================================================

pub const BACKGROUND: Color = Color::PINK;
pub const PADDLE_COLOR: Color = Color::BLUE;
pub const BALL_COLOR: Color = Color::RED;
pub const TEXT_COLOR: Color = Color::BLACK;

pub const TEXT_SIZE: f32 = 12.0;

/// Baseline origin of the current-run counter.
pub const HITS_ORIGIN: (i32, i32) = (10, 30);

/// Baseline origin of the best-run counter.
pub const HIGHEST_ORIGIN: (i32, i32) = (800, 30);

//=== draw_scene() ========================================================

/// Draws one complete frame of `state` onto `canvas`.
pub fn draw_scene(canvas: &mut Canvas, state: &GameState) {
    canvas.fill(BACKGROUND);

    let paddle = &state.paddle;
    canvas.fill_rect(
        paddle.left(),
        paddle.top(state.area),
        paddle.width,
        paddle.height,
        PADDLE_COLOR,
    );

    let ball = &state.ball;
    canvas.fill_oval(ball.pos.x, ball.pos.y, ball.size, ball.size, BALL_COLOR);

    let hits = format!("hits: {}", state.score.hits);
    text::draw_text(canvas, &hits, HITS_ORIGIN.0, HITS_ORIGIN.1, TEXT_SIZE, TEXT_COLOR);

    let highest = format!("highest: {}", state.score.highest);
    text::draw_text(canvas, &highest, HIGHEST_ORIGIN.0, HIGHEST_ORIGIN.1, TEXT_SIZE, TEXT_COLOR);
}

//=========================================================================
// Unit Tests
//=========================================================================
