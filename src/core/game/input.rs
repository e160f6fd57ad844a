//=========================================================================
// Paddle Input Handler
//=========================================================================
//
// Applies pointer and key input to the paddle.
//
// Clamping is asymmetric:
//   - pointer moves place the paddle center verbatim, unclamped;
//   - LEFT/RIGHT presses step the paddle and clamp to [0, width].
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::state::GameState;
use crate::core::input::KeyCode;

//=== Pointer =============================================================

/// Centers the paddle on the pointer's x coordinate.
pub fn pointer_moved(state: &mut GameState, x: i32) {
    state.paddle.center_x = x;
}

//=== Keys ================================================================

/// Steps the paddle for LEFT/RIGHT presses.
///
/// Returns `true` if the key moves the paddle. Any other key is a no-op.
///
/// Steps saturate, so a center left at the edge of the `i32` range by the
/// pointer still ends up clamped (LEFT) or near where it was (RIGHT).
pub fn key_pressed(state: &mut GameState, key: KeyCode) -> bool {
    let paddle = &mut state.paddle;

    match key {
        KeyCode::ArrowLeft => {
            paddle.center_x = paddle.center_x.saturating_sub(paddle.key_step);
            if paddle.center_x < 0 {
                paddle.center_x = 0;
            }
            true
        }
        KeyCode::ArrowRight => {
            paddle.center_x = paddle.center_x.saturating_add(paddle.key_step);
            if paddle.center_x > state.area.width() {
                paddle.center_x = state.area.width();
            }
            true
        }
        _ => false,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::state::DrawableArea;

    fn state() -> GameState {
        GameState::new(DrawableArea::new(1024, 602).unwrap())
    }

    #[test]
    fn pointer_sets_center_verbatim() {
        let mut state = state();

        pointer_moved(&mut state, 512);
        assert_eq!(state.paddle.center_x, 512);

        pointer_moved(&mut state, -40);
        assert_eq!(state.paddle.center_x, -40, "pointer input is not clamped");

        pointer_moved(&mut state, 5000);
        assert_eq!(state.paddle.center_x, 5000);
    }

    #[test]
    fn left_presses_clamp_at_zero() {
        let mut state = state();
        state.paddle.center_x = 20;

        let positions: Vec<i32> = (0..5)
            .map(|_| {
                key_pressed(&mut state, KeyCode::ArrowLeft);
                state.paddle.center_x
            })
            .collect();

        assert_eq!(positions, vec![10, 0, 0, 0, 0]);
    }

    #[test]
    fn right_presses_clamp_at_width() {
        let mut state = state();
        state.paddle.center_x = 1010;

        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, 1020);

        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, 1024);

        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, 1024);
    }

    #[test]
    fn key_press_pulls_unclamped_pointer_position_back_inside() {
        let mut state = state();

        pointer_moved(&mut state, -300);
        key_pressed(&mut state, KeyCode::ArrowLeft);
        assert_eq!(state.paddle.center_x, 0);

        pointer_moved(&mut state, 4000);
        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, 1024);
    }

    #[test]
    fn steps_from_extreme_pointer_positions_saturate() {
        let mut state = state();

        pointer_moved(&mut state, i32::MIN);
        key_pressed(&mut state, KeyCode::ArrowLeft);
        assert_eq!(state.paddle.center_x, 0);

        pointer_moved(&mut state, i32::MIN);
        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, i32::MIN + 10);

        pointer_moved(&mut state, i32::MAX);
        key_pressed(&mut state, KeyCode::ArrowRight);
        assert_eq!(state.paddle.center_x, 1024);

        pointer_moved(&mut state, i32::MAX);
        key_pressed(&mut state, KeyCode::ArrowLeft);
        assert_eq!(state.paddle.center_x, i32::MAX - 10);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = state();
        state.paddle.center_x = 300;

        assert!(!key_pressed(&mut state, KeyCode::Unidentified));
        assert_eq!(state.paddle.center_x, 300);
    }
}
