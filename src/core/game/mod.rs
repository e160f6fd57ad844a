//=========================================================================
// Game Rules
//=========================================================================
//
// The rally itself: state, the per-tick simulation step, and the paddle
// input handler. Everything here is synchronous and total; the core
// thread is the only caller that mutates a live `GameState`.
//
// Architecture:
// ```text
//   core thread
//     ├─ tick  ──► step::step(&mut GameState)
//     └─ input ──► input::{pointer_moved, key_pressed}(&mut GameState, ..)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod state;
pub mod step;

//=== Public API ==========================================================

pub use state::{
    Ball, DrawableArea, GameState, Paddle, Point, Score, Velocity, BALL_SIZE, BALL_SPEED_X,
    BALL_SPEED_Y, PADDLE_HEIGHT, PADDLE_KEY_STEP, PADDLE_WIDTH, RESPAWN_POSITION,
};
pub use step::{step, StepOutcome};
