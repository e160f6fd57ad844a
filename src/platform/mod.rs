//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game's core thread.
//
// Architecture:
// ```text
//  Main Thread:                         Core Thread:
//  ┌──────────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop            │    │  EventCollector      │
//  │   ↓                          │    │   ├─ PlatformEvent   │
//  │  InputProcessor              │    │   └─ ticker          │
//  │   ├─ Converts Winit          │    │  ↓                   │
//  │   └─ Physical → logical      │    │  GameState           │
//  │   ↓                          │    │   ├─ apply inputs    │
//  │  InputBuffer (ordered)       │    │   └─ step()          │
//  │   ↓                          │    │  ↓                   │
//  │  RedrawRequested ── flush ───┼───►│  publish Frame       │
//  │                              │    └──────────┬───────────┘
//  │  user_event(Frame) ◄─────────┼───────────────┘
//  │   ↓                          │      EventLoopProxy<Frame>
//  │  SurfaceRenderer::present    │
//  └──────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one ordered batch
//    → Core advances the ball on its own ticker
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input is batched per frame and
//   applied by the core thread in arrival order
// - **Snapshots, not shared state**: the core thread owns the game; the
//   window only ever sees copied `Frame`s, so a frame is never torn
// - **Graceful channel disconnect**: if the core thread dies, the platform
//   logs a warning and keeps the window closable
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create the fixed-size, non-resizable game window
// - Convert Winit types → InputEvents
// - Buffer input until frame boundary
// - Present the latest frame published by the core thread
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod surface;

//=== External Crates =====================================================

use std::rc::Rc;

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{Frame, FrameSink, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use surface::SurfaceRenderer;

pub use surface::RenderError;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: the game cannot run without a window.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),

    /// The OS refused to create the game window.
    WindowCreation(OsError),

    /// The window surface could not be set up for drawing.
    SurfaceCreation(RenderError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::SurfaceCreation(e) => write!(f, "Surface creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::SurfaceCreation(e) => Some(e),
        }
    }
}

//=== WindowConfig ========================================================

/// Title and logical inner size of the game window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== FrameProxy ==========================================================

/// Delivers core-thread frames into the Winit event loop as user events.
pub(crate) struct FrameProxy(EventLoopProxy<Frame>);

impl FrameProxy {
    pub(crate) fn new(event_loop: &EventLoop<Frame>) -> Self {
        Self(event_loop.create_proxy())
    }
}

impl FrameSink for FrameProxy {
    fn publish(&self, frame: Frame) -> bool {
        self.0.send_event(frame).is_ok()
    }
}

//=== Event Loop ==========================================================

/// Creates the Winit event loop carrying published frames as user events.
///
/// Must be called on the main thread.
pub(crate) fn create_event_loop() -> Result<EventLoop<Frame>, PlatformError> {
    EventLoop::<Frame>::with_user_event()
        .build()
        .map_err(PlatformError::EventLoopCreation)
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS), sends
/// batched input to the core thread and draws the frames it publishes.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, config)`
/// 2. **Execution**: `platform.run(event_loop)` blocks until the window closes
/// 3. **Startup**: `resumed()` creates the window and reports its size
/// 4. **Shutdown**: user closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// Window surface (None until `resumed()` called).
    renderer: Option<SurfaceRenderer>,

    /// Ordered input waiting for the next frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to InputEvents.
    input_processor: InputProcessor,

    /// Most recent snapshot from the core thread.
    latest_frame: Option<Frame>,

    config: WindowConfig,

    /// Set when presentation is failing, so the warning is logged once.
    render_failing: bool,

    /// Error that stopped the event loop, reported by `run()`.
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(event_sender: Sender<PlatformEvent>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            renderer: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            latest_frame: None,
            config,
            render_failing: false,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop fails, or if the window
    /// or its surface could not be created during startup.
    pub(crate) fn run(mut self, event_loop: EventLoop<Frame>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Creates the window and its surface, returning the logical inner size.
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(u32, u32), PlatformError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::WindowCreation)?,
        );

        self.input_processor.set_scale_factor(window.scale_factor());
        let logical: LogicalSize<u32> = window
            .inner_size()
            .to_logical(self.input_processor.scale_factor());

        info!(
            target: "platform",
            "Window created: {}x{} logical ({}x{} physical @ {}x DPI)",
            logical.width,
            logical.height,
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let renderer = SurfaceRenderer::new(window, logical.width, logical.height)
            .map_err(PlatformError::SurfaceCreation)?;
        renderer.window().request_redraw();
        self.renderer = Some(renderer);

        Ok((logical.width, logical.height))
    }

    /// Flushes buffered input events to the core thread.
    ///
    /// If the channel is disconnected (core thread exited early), logs a
    /// warning and drops the events so the window stays closable.
    fn flush_input_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        trace!(target: "platform::input", "Flushing {} events", self.buffer.len());

        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    /// Draws the most recent frame, if any.
    fn present_latest_frame(&mut self) {
        let (Some(renderer), Some(frame)) = (self.renderer.as_mut(), self.latest_frame) else {
            return;
        };

        match renderer.present(&frame.state) {
            Ok(()) => {
                if self.render_failing {
                    info!(target: "platform::render", "Rendering recovered at tick {}", frame.tick);
                    self.render_failing = false;
                }
            }
            Err(e) => {
                if !self.render_failing {
                    warn!(target: "platform::render", "Skipping frame {}: {}", frame.tick, e);
                    self.render_failing = true;
                }
            }
        }
    }

    /// Buffers hover motion; drag motion is dropped.
    fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        match self.input_processor.process_cursor_moved(position) {
            Some(event) => {
                self.buffer.push(event);
                self.request_redraw();
            }
            None => trace!(target: "platform::input", "Drag motion ignored"),
        }
    }

    fn request_redraw(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.window().request_redraw();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.renderer.as_ref().map(SurfaceRenderer::window)
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<Frame> for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet and reports its drawable
    /// size to the core thread.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match self.open_window(event_loop) {
            Ok((width, height)) => {
                if self
                    .event_sender
                    .send(PlatformEvent::WindowCreated { width, height })
                    .is_err()
                {
                    warn!(target: "platform", "Core thread gone before window creation was reported");
                }
            }
            Err(e) => {
                error!(target: "platform", "{}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
                self.input_processor.set_scale_factor(*scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => self.on_cursor_moved(*position),

            WindowEvent::MouseInput { state, button, .. } => {
                self.input_processor.process_mouse_button(*button, *state);
            }

            WindowEvent::Focused(false) => self.input_processor.release_all_buttons(),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                    self.request_redraw();
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();
                self.present_latest_frame();
            }

            _ => {
                // Ignore: focus gain, Occluded, etc.
            }
        }
    }

    /// Receives a frame published by the core thread.
    fn user_event(&mut self, _event_loop: &ActiveEventLoop, frame: Frame) {
        self.latest_frame = Some(frame);
        self.request_redraw();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
