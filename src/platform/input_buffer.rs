//=========================================================================
// Input Buffer
//
// Collects engine input events between frame boundaries.
//
// Responsibilities:
// - Preserve arrival order (a key press after a pointer move must be
//   applied after it, and vice versa)
// - Coalesce consecutive pointer moves (last position wins)
// - Keep every key press, including OS auto-repeat
// - Hand the whole frame's input over via `drain()`
//
// Notes:
// The buffer exists only for the current frame and is emptied when the
// platform flushes it to the core thread on `RedrawRequested`.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates enough room for a busy frame of pointer and key input.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // A pointer move directly after another pointer move replaces it;
    // everything else is appended.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_pointer_move() {
            if let Some(last) = self.events.last_mut() {
                if last.is_pointer_move() {
                    *last = event;
                    return;
                }
            }
        }
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events in order, or `None` if nothing arrived.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, repeat: false }
    }

    fn pointer(x: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y: 0.0 }
    }

    #[test]
    fn consecutive_pointer_moves_coalesce() {
        let mut buffer = InputBuffer::new();
        buffer.push(pointer(10.0));
        buffer.push(pointer(20.0));
        buffer.push(pointer(30.0));

        assert_eq!(buffer.drain(), Some(vec![pointer(30.0)]));
    }

    #[test]
    fn keys_split_pointer_runs() {
        let mut buffer = InputBuffer::new();
        buffer.push(pointer(10.0));
        buffer.push(key_down(KeyCode::ArrowLeft));
        buffer.push(pointer(20.0));
        buffer.push(pointer(25.0));

        assert_eq!(
            buffer.drain(),
            Some(vec![pointer(10.0), key_down(KeyCode::ArrowLeft), pointer(25.0)])
        );
    }

    #[test]
    fn repeated_key_presses_are_kept() {
        let mut buffer = InputBuffer::new();
        for _ in 0..3 {
            buffer.push(key_down(KeyCode::ArrowRight));
        }
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::ArrowLeft));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }

    //--- Memory Retention -------------------------------------------------
    //
    // Draining keeps the allocation for reuse on the next frame.
    //
    #[test]
    fn drain_does_not_deallocate() {
        let mut buffer = InputBuffer::new();
        for _ in 0..256 {
            buffer.push(key_down(KeyCode::ArrowLeft));
        }
        let capacity_before = buffer.events.capacity();

        buffer.drain();

        assert_eq!(buffer.events.capacity(), capacity_before);
    }
}
