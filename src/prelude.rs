//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use solo_pong::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::PlatformError;

// Simulation
pub use crate::core::game::{step, Ball, DrawableArea, GameState, Paddle, Point, Score, StepOutcome, Velocity};

// Input
pub use crate::core::input::{apply_event, InputEvent, KeyCode};

// Rendering
pub use crate::render::{draw_scene, Canvas, Color};
