//=========================================================================
// Solo Pong — Library Root
//
// This crate defines the public API surface of the game.
//
// Responsibilities:
// - Expose the game runtime (`Engine`, `EngineBuilder`)
// - Expose the pure simulation (`core::game`) and the software render
//   pass (`render`) so they can be driven without a window
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use solo_pong::EngineBuilder;
//
// fn main() -> Result<(), solo_pong::PlatformError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game state, the rules of a tick, input handling and
// the core thread. `render` paints a game snapshot onto a CPU canvas.
//
pub mod core;
pub mod prelude;
pub mod render;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the window, Winit integration and surface
// presentation, and is kept private.
//
// `engine` wires the core thread and the platform together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::{PlatformError, RenderError};
