//=========================================================================
// Solo Pong Engine
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tick_period()      ├─ spawns core thread
//         ├─ with_channel_capacity() ├─ runs platform
//         ├─ with_title()            └─ blocks until exit
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::CoreLoop;
use crate::platform::{self, FrameProxy, Platform, PlatformError, WindowConfig};

//=== Defaults ============================================================

/// Interval between ball steps.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(16);

pub const DEFAULT_CHANNEL_CAPACITY: usize = 128;

pub const DEFAULT_TITLE: &str = "Pong";

/// Logical inner size of the window (and thus the drawable area).
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1024, 602);

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Tick period**: 16 ms (about 60 ball steps per second)
/// - **Channel capacity**: 128 events
/// - **Title**: "Pong"
/// - **Window size**: 1024x602 logical pixels
///
/// # Examples
///
/// ```no_run
/// use solo_pong::EngineBuilder;
/// use std::time::Duration;
///
/// EngineBuilder::new()
///     .with_tick_period(Duration::from_millis(8))
///     .with_window_size(800, 600)
///     .build()
///     .run()
///     .expect("game failed");
/// ```
pub struct EngineBuilder {
    tick_period: Duration,
    channel_capacity: usize,
    title: String,
    window_size: (u32, u32),
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            title: DEFAULT_TITLE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Sets the interval between simulation steps.
    ///
    /// Ball speed is fixed per step, so shorter periods make the game faster.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        assert!(!period.is_zero(), "Tick period must be positive");
        self.tick_period = period;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical inner size of the window.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (tick: {:?}, channel: {}, window: {}x{})",
            self.tick_period, self.channel_capacity, self.window_size.0, self.window_size.1
        );

        Engine {
            tick_period: self.tick_period,
            channel_capacity: self.channel_capacity,
            window: WindowConfig {
                title: self.title,
                width: self.window_size.0,
                height: self.window_size.1,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreLoop (Core Thread, ticker + events)
///   │     └─► GameState: input, step, score
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input, Presentation
///
/// Platform → Core: bounded channel (PlatformEvent)
/// Core → Platform: EventLoopProxy (Frame)
/// ```
pub struct Engine {
    tick_period: Duration,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the game and blocks until the window is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event loop and the platform → core channel
    /// 2. Spawns the core thread
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → channel disconnects → core thread terminates
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop, window or window surface
    /// could not be created, or if the event loop fails while running.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (tick: {:?})", self.tick_period);

        //--- 1. Create event loop and communication channel ---------------
        let event_loop = platform::create_event_loop()?;

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let sink = FrameProxy::new(&event_loop);
        let core_handle = CoreLoop::new(rx, sink, self.tick_period).spawn();
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        info!("Platform initialized, entering event loop");

        let result = platform.run(event_loop);
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
