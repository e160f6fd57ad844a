//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Cursor positions arrive in physical pixels; they are converted to the
// logical units the simulation runs in, using the window's current scale
// factor. Keys without a physical code (IME, exotic keyboards) are
// filtered (returns None).
//
// Only hover motion steers the paddle: while any mouse button is held the
// cursor is dragging, and its motion is dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== InputProcessor ======================================================

/// Converts Winit events to InputEvents, tracking the window scale factor
/// and which mouse buttons are held.
pub(crate) struct InputProcessor {
    scale_factor: f64,
    held_buttons: HashSet<MouseButton>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            scale_factor: 1.0,
            held_buttons: HashSet::new(),
        }
    }

    //--- Scale Factor -----------------------------------------------------

    /// Updates the physical-to-logical ratio (window creation, DPI change).
    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub(crate) fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters keys without a physical code).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    /// Converts a cursor position to a logical-unit pointer event.
    ///
    /// Returns `None` while a mouse button is held (drag).
    pub(crate) fn process_cursor_moved(&self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        if self.is_dragging() {
            return None;
        }

        let logical = position.to_logical::<f64>(self.scale_factor);
        Some(InputEvent::PointerMoved {
            x: logical.x as f32,
            y: logical.y as f32,
        })
    }

    /// Records a mouse button press or release. Buttons produce no events.
    pub(crate) fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held_buttons.insert(button);
            }
            ElementState::Released => {
                self.held_buttons.remove(&button);
            }
        }
    }

    /// Forgets held buttons; their releases may never arrive once the
    /// window loses focus.
    pub(crate) fn release_all_buttons(&mut self) {
        self.held_buttons.clear();
    }

    pub(crate) fn is_dragging(&self) -> bool {
        !self.held_buttons.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => return None,
        };

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, repeat },
            ElementState::Released => InputEvent::KeyUp { key },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Only the horizontal arrows are mapped; everything else becomes
/// `Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn arrow_press_becomes_key_down() {
        let processor = InputProcessor::new();
        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::ArrowLeft),
            ElementState::Pressed,
            false,
        );

        assert_eq!(event, Some(InputEvent::KeyDown { key: KeyCode::ArrowLeft, repeat: false }));
    }

    #[test]
    fn auto_repeat_is_preserved() {
        let processor = InputProcessor::new();
        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::ArrowRight),
            ElementState::Pressed,
            true,
        );

        assert_eq!(event, Some(InputEvent::KeyDown { key: KeyCode::ArrowRight, repeat: true }));
    }

    #[test]
    fn release_becomes_key_up() {
        let processor = InputProcessor::new();
        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::ArrowRight),
            ElementState::Released,
            false,
        );

        assert_eq!(event, Some(InputEvent::KeyUp { key: KeyCode::ArrowRight }));
    }

    #[test]
    fn unidentified_physical_key_is_filtered() {
        let processor = InputProcessor::new();
        let event = processor.process_key(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Pressed,
            false,
        );

        assert!(event.is_none());
    }

    #[test]
    fn unmapped_codes_become_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Unidentified);
    }

    #[test]
    fn cursor_is_converted_to_logical_units() {
        let mut processor = InputProcessor::new();
        processor.set_scale_factor(2.0);

        let event = processor.process_cursor_moved(PhysicalPosition::new(1000.0, 300.0));

        assert_eq!(event, Some(InputEvent::PointerMoved { x: 500.0, y: 150.0 }));
    }

    #[test]
    fn drag_motion_is_dropped_until_all_buttons_release() {
        let mut processor = InputProcessor::new();
        let position = PhysicalPosition::new(200.0, 100.0);

        processor.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        processor.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(processor.process_cursor_moved(position), None);

        processor.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(processor.process_cursor_moved(position), None);

        processor.process_mouse_button(MouseButton::Right, ElementState::Released);
        assert!(processor.process_cursor_moved(position).is_some());
    }

    #[test]
    fn focus_loss_ends_a_drag() {
        let mut processor = InputProcessor::new();
        processor.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        processor.release_all_buttons();

        assert!(!processor.is_dragging());
    }

    #[test]
    fn invalid_scale_factor_is_rejected() {
        let mut processor = InputProcessor::new();
        processor.set_scale_factor(0.0);
        processor.set_scale_factor(f64::NAN);

        assert_eq!(processor.scale_factor(), 1.0);
    }
}
