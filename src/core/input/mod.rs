//=========================================================================
// Input Dispatch
//
// Routes engine input events to the paddle handler on the core thread.
//
// Responsibilities:
// - Convert pointer coordinates to the simulation's integer space
// - Forward key presses to the paddle handler
// - Ignore key releases (the paddle reacts to presses only)
//
// Notes:
// Dispatch runs on the core thread between ticks, so input and the
// simulation step never touch `GameState` at the same time.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};

//=== External Crates =====================================================

use log::trace;

//=== Internal Imports ====================================================

use crate::core::game::{input as paddle, GameState};

//=== InputEffect =========================================================

/// What an input event did to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    /// The paddle was moved (possibly to the position it already had).
    PaddleMoved,

    /// The event has no meaning for the game.
    Ignored,
}

//=== Dispatch ============================================================

/// Applies a single event to `state`.
pub fn apply_event(state: &mut GameState, event: &InputEvent) -> InputEffect {
    match *event {
        InputEvent::PointerMoved { x, .. } => {
            paddle::pointer_moved(state, pointer_to_units(x));
            InputEffect::PaddleMoved
        }
        InputEvent::KeyDown { key, .. } => {
            if paddle::key_pressed(state, key) {
                InputEffect::PaddleMoved
            } else {
                trace!(target: "core::input", "Key {:?} has no binding", key);
                InputEffect::Ignored
            }
        }
        InputEvent::KeyUp { .. } => InputEffect::Ignored,
    }
}

/// Applies a batch in arrival order. Returns the number of events that
/// moved the paddle.
pub fn apply_batch(state: &mut GameState, batch: &[InputEvent]) -> usize {
    batch
        .iter()
        .filter(|event| apply_event(state, event) == InputEffect::PaddleMoved)
        .count()
}

//--- Internal Helpers ----------------------------------------------------

/// Floors a logical pointer coordinate onto the integer grid.
///
/// Non-finite values map to 0. Values beyond the `i32` range saturate to
/// `i32::MIN`/`i32::MAX`; the paddle's key steps and bounds saturate as
/// well, so such a center is still safe to step and collide against.
fn pointer_to_units(x: f32) -> i32 {
    if x.is_finite() {
        x.floor() as i32
    } else {
        0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::DrawableArea;

    fn state() -> GameState {
        GameState::new(DrawableArea::new(1024, 602).unwrap())
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, repeat: false }
    }

    #[test]
    fn pointer_move_is_floored() {
        let mut state = state();

        apply_event(&mut state, &InputEvent::PointerMoved { x: 250.9, y: 40.0 });
        assert_eq!(state.paddle.center_x, 250);

        apply_event(&mut state, &InputEvent::PointerMoved { x: -0.5, y: 0.0 });
        assert_eq!(state.paddle.center_x, -1);
    }

    #[test]
    fn non_finite_pointer_maps_to_origin() {
        let mut state = state();
        state.paddle.center_x = 77;

        apply_event(&mut state, &InputEvent::PointerMoved { x: f32::NAN, y: 0.0 });
        assert_eq!(state.paddle.center_x, 0);
    }

    #[test]
    fn extreme_pointer_then_key_and_tick_stay_in_range() {
        use crate::core::game;

        for (x, key, expected) in [
            (-1e12, KeyCode::ArrowLeft, 0),
            (-f32::MAX, KeyCode::ArrowRight, i32::MIN + 10),
            (1e12, KeyCode::ArrowRight, 1024),
            (f32::MAX, KeyCode::ArrowLeft, i32::MAX - 10),
        ] {
            let mut state = state();

            apply_event(&mut state, &InputEvent::PointerMoved { x, y: 0.0 });
            game::step(&mut state);
            apply_event(&mut state, &key_down(key));
            let outcome = game::step(&mut state);

            assert_eq!(state.paddle.center_x, expected, "pointer at {}", x);
            assert!(!outcome.paddle_hit);
        }
    }

    #[test]
    fn key_up_is_ignored() {
        let mut state = state();
        state.paddle.center_x = 100;

        let effect = apply_event(&mut state, &InputEvent::KeyUp { key: KeyCode::ArrowLeft });

        assert_eq!(effect, InputEffect::Ignored);
        assert_eq!(state.paddle.center_x, 100);
    }

    #[test]
    fn repeated_key_down_keeps_stepping() {
        let mut state = state();
        state.paddle.center_x = 100;

        apply_event(&mut state, &key_down(KeyCode::ArrowRight));
        apply_event(&mut state, &InputEvent::KeyDown { key: KeyCode::ArrowRight, repeat: true });

        assert_eq!(state.paddle.center_x, 120);
    }

    #[test]
    fn batch_is_applied_in_order() {
        let mut state = state();

        let moved = apply_batch(
            &mut state,
            &[
                InputEvent::PointerMoved { x: 500.0, y: 10.0 },
                key_down(KeyCode::ArrowLeft),
                key_down(KeyCode::Unidentified),
                InputEvent::KeyUp { key: KeyCode::ArrowLeft },
            ],
        );

        assert_eq!(moved, 2);
        assert_eq!(state.paddle.center_x, 490);
    }

    #[test]
    fn pointer_after_key_wins() {
        let mut state = state();

        apply_batch(
            &mut state,
            &[key_down(KeyCode::ArrowRight), InputEvent::PointerMoved { x: 42.0, y: 0.0 }],
        );

        assert_eq!(state.paddle.center_x, 42);
    }
}
