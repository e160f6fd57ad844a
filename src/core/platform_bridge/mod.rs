//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the core thread.
//
// This module defines the contract between the platform and the game
// loop, so the window backend can change without touching core code.
//
// Components:
// - `interface`: event, frame and sink types (the contract)
// - `event_collector`: core-side event/ticker multiplexing
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{CoreSignal, EventCollector};
pub use interface::{Frame, FrameSink, PlatformEvent};
