//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core and core-to-platform contract.
//
// ```text
//   platform ──PlatformEvent──► core thread ──Frame──► FrameSink ──► platform
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;

//=== Internal Dependencies ===============================================

use crate::core::game::GameState;
use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the bounded channel.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// The window exists and reports its logical drawable size.
    ///
    /// Sent once; the core thread creates the game state on receipt.
    WindowCreated { width: u32, height: u32 },

    /// Input collected since the last frame boundary, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested (or the platform failed fatally).
    WindowClosed,
}

//=== Frame ===============================================================

/// Snapshot of the game published by the core thread for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub state: GameState,

    /// Number of simulation ticks completed when the snapshot was taken.
    pub tick: u64,
}

//=== FrameSink ===========================================================

/// Receiver side of published frames.
///
/// Implemented by the platform (waking the winit event loop) and by
/// plain channels in tests.
pub trait FrameSink: Send + 'static {
    /// Hands a frame to the renderer. Returns `false` once the receiving
    /// side is gone.
    fn publish(&self, frame: Frame) -> bool;
}

impl FrameSink for Sender<Frame> {
    fn publish(&self, frame: Frame) -> bool {
        self.send(frame).is_ok()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
