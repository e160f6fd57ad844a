//=========================================================================
// Input Event Types
//
// Engine-side representation of the input the game listens to.
//
// This module abstracts away platform-specific input (Winit) into a
// small, portable set of events consumed by the core thread.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    core::input::apply_event()
//         ↓
//    Paddle handler (core::game::input)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys that steer the paddle are named; everything else arrives
/// as `Unidentified` and is ignored by the paddle handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,

    /// Any other key.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Pointer coordinates are logical units relative to the drawable area
/// (top-left origin), already converted from physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed. OS auto-repeat produces further `KeyDown`s with
    /// `repeat` set.
    KeyDown { key: KeyCode, repeat: bool },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Pointer moved inside the window.
    PointerMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// True for pointer motion, which the platform buffer coalesces.
    pub fn is_pointer_move(&self) -> bool {
        matches!(self, Self::PointerMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pointer_moves_are_coalescable() {
        assert!(InputEvent::PointerMoved { x: 1.0, y: 2.0 }.is_pointer_move());
        assert!(!InputEvent::KeyDown { key: KeyCode::ArrowLeft, repeat: false }.is_pointer_move());
        assert!(!InputEvent::KeyUp { key: KeyCode::ArrowLeft }.is_pointer_move());
    }

    #[test]
    fn repeat_flag_distinguishes_key_downs() {
        let first = InputEvent::KeyDown { key: KeyCode::ArrowRight, repeat: false };
        let repeated = InputEvent::KeyDown { key: KeyCode::ArrowRight, repeat: true };
        assert_ne!(first, repeated);
    }
}
